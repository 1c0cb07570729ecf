//! The catch-all codegen package.
//!
//! Everything the binding generator produced and no dedicated package claims
//! ends up here. Registered last by default so its capability names carry the
//! lowest precedence under last-registered-wins resolution.
mod error;

pub use crate::error::GeneratedError;
use bindery_kernel::prelude::*;

/// Codegen-backed turbo-module bindings.
#[bindery_derive::package]
pub struct Generated {}

impl Capabilities for Generated {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::Generated).module("GeneratedBindings").turbo()
    }
}

/// Initialize the generated package.
///
/// # Errors
///
pub fn init_generated(_ctx: &HostContext) -> Result<RegisteredPackage, GeneratedError> {
    tracing::info!("Generated package initialized");

    let handle = Generated::new(GeneratedInner {});
    Ok(RegisteredPackage::new(PackageKind::Generated, handle))
}
