//! Host-side capability resolution.
//!
//! The registry itself never deduplicates: every listed package is
//! constructed and kept. Overlapping capability names are resolved here,
//! after the build, with last-registered-wins precedence.

use bindery_domain::manifest::PackageKind;
use bindery_domain::registry::RegisteredPackage;
use std::collections::HashMap;

/// Lookup table from capability name to the package that owns it.
#[derive(Debug, Default)]
pub struct CapabilityIndex {
    modules: HashMap<String, PackageKind>,
    components: HashMap<String, PackageKind>,
}

impl CapabilityIndex {
    /// Index a built registry. Later entries shadow earlier ones when names
    /// overlap; duplicate names never fail.
    #[must_use]
    pub fn from_registry(registry: &[RegisteredPackage]) -> Self {
        let mut index = Self::default();
        for package in registry {
            let descriptor = package.descriptor();
            for name in descriptor.modules {
                index.modules.insert(name.into_owned(), descriptor.kind);
            }
            for name in descriptor.components {
                index.components.insert(name.into_owned(), descriptor.kind);
            }
        }
        index
    }

    /// Which package provides the named native module.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<PackageKind> {
        self.modules.get(name).copied()
    }

    /// Which package provides the named view component.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<PackageKind> {
        self.components.get(name).copied()
    }

    /// Total distinct module and component names.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.modules.len(), self.components.len())
    }
}
