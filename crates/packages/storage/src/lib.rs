//! Storage package slices: the async key-value store, the secure keystore,
//! and the secure random source.
//!
//! The key-value store and the keystore anchor themselves under the context's
//! data directory, so an empty data root is a construction failure here, not
//! a latent fault discovered on first write.
mod error;

pub use crate::error::StorageError;
use bindery_kernel::prelude::*;
use std::path::PathBuf;

/// Asynchronous key-value store exposed to the host bridge.
#[bindery_derive::package]
pub struct AsyncStorage {
    pub root: PathBuf,
}

impl Capabilities for AsyncStorage {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::AsyncStorage).module("AsyncStorage")
    }
}

/// Initialize the async-storage package.
///
/// # Errors
/// Returns [`StorageError::InvalidRoot`] if the context's data directory is
/// empty.
pub fn init_async_storage(ctx: &HostContext) -> Result<RegisteredPackage, StorageError> {
    let root = storage_root(ctx, PackageKind::AsyncStorage)?;
    tracing::info!("AsyncStorage package initialized");

    let handle = AsyncStorage::new(AsyncStorageInner { root });
    Ok(RegisteredPackage::new(PackageKind::AsyncStorage, handle))
}

/// Hardware-backed credential store.
#[bindery_derive::package]
pub struct SecureKeyStore {
    pub root: PathBuf,
}

impl Capabilities for SecureKeyStore {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::SecureKeyStore).module("SecureKeyStore")
    }
}

/// Initialize the secure keystore package.
///
/// # Errors
/// Returns [`StorageError::InvalidRoot`] if the context's data directory is
/// empty.
pub fn init_secure_key_store(ctx: &HostContext) -> Result<RegisteredPackage, StorageError> {
    let root = storage_root(ctx, PackageKind::SecureKeyStore)?;
    tracing::info!("SecureKeyStore package initialized");

    let handle = SecureKeyStore::new(SecureKeyStoreInner { root });
    Ok(RegisteredPackage::new(PackageKind::SecureKeyStore, handle))
}

/// CSPRNG bridge module; stateless.
#[bindery_derive::package]
pub struct SecureRandom {}

impl Capabilities for SecureRandom {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::SecureRandom).module("SecureRandom")
    }
}

/// Initialize the secure-random package.
///
/// # Errors
///
pub fn init_secure_random(_ctx: &HostContext) -> Result<RegisteredPackage, StorageError> {
    tracing::info!("SecureRandom package initialized");

    let handle = SecureRandom::new(SecureRandomInner {});
    Ok(RegisteredPackage::new(PackageKind::SecureRandom, handle))
}

fn storage_root(ctx: &HostContext, package: PackageKind) -> Result<PathBuf, StorageError> {
    let root = &ctx.storage.data_dir;
    if root.as_os_str().is_empty() {
        return Err(StorageError::InvalidRoot { package, path: root.clone() });
    }
    Ok(root.clone())
}
