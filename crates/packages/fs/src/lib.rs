//! File system package slices: blob transfer, sandboxed file access, and the
//! system file viewer/picker bridges.
mod error;

pub use crate::error::FsError;
use bindery_kernel::prelude::*;
use std::path::{Path, PathBuf};

/// Blob upload/download helper; stages payloads under the cache directory.
#[bindery_derive::package]
pub struct BlobUtil {
    pub staging_dir: PathBuf,
}

impl Capabilities for BlobUtil {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::BlobUtil).module("BlobUtil")
    }
}

/// Initialize the blob-util package.
///
/// # Errors
/// Returns [`FsError::InvalidRoot`] if the context's cache directory is empty.
pub fn init_blob_util(ctx: &HostContext) -> Result<RegisteredPackage, FsError> {
    let staging_dir = non_empty_root(&ctx.storage.cache_dir, PackageKind::BlobUtil)?;
    tracing::info!("BlobUtil package initialized");

    let handle = BlobUtil::new(BlobUtilInner { staging_dir });
    Ok(RegisteredPackage::new(PackageKind::BlobUtil, handle))
}

/// Sandboxed file system access rooted at the data directory.
#[bindery_derive::package]
pub struct Fs {
    pub root: PathBuf,
}

impl Capabilities for Fs {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::Fs).module("Fs")
    }
}

/// Initialize the file-system package.
///
/// # Errors
/// Returns [`FsError::InvalidRoot`] if the context's data directory is empty.
pub fn init_fs(ctx: &HostContext) -> Result<RegisteredPackage, FsError> {
    let root = non_empty_root(&ctx.storage.data_dir, PackageKind::Fs)?;
    tracing::info!("Fs package initialized");

    let handle = Fs::new(FsInner { root });
    Ok(RegisteredPackage::new(PackageKind::Fs, handle))
}

/// Opens downloaded files with the platform's default application.
#[bindery_derive::package]
pub struct FileViewer {}

impl Capabilities for FileViewer {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::FileViewer).module("FileViewer")
    }
}

/// Initialize the file-viewer package.
///
/// # Errors
///
pub fn init_file_viewer(_ctx: &HostContext) -> Result<RegisteredPackage, FsError> {
    tracing::info!("FileViewer package initialized");

    let handle = FileViewer::new(FileViewerInner {});
    Ok(RegisteredPackage::new(PackageKind::FileViewer, handle))
}

/// System document picker dialog bridge.
#[bindery_derive::package]
pub struct DocumentPicker {}

impl Capabilities for DocumentPicker {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::DocumentPicker).module("DocumentPicker")
    }
}

/// Initialize the document-picker package.
///
/// # Errors
///
pub fn init_document_picker(_ctx: &HostContext) -> Result<RegisteredPackage, FsError> {
    tracing::info!("DocumentPicker package initialized");

    let handle = DocumentPicker::new(DocumentPickerInner {});
    Ok(RegisteredPackage::new(PackageKind::DocumentPicker, handle))
}

fn non_empty_root(root: &Path, package: PackageKind) -> Result<PathBuf, FsError> {
    if root.as_os_str().is_empty() {
        return Err(FsError::InvalidRoot { package, path: root.to_path_buf() });
    }
    Ok(root.to_path_buf())
}
