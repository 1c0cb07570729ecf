//! Convenience re-exports for package slice crates.

pub use crate::domain::capabilities::CapabilityClass;
pub use crate::domain::context::HostContext;
pub use crate::domain::manifest::PackageKind;
pub use crate::domain::registry::{Capabilities, Package, PackageDescriptor, RegisteredPackage};
