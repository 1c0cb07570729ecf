//! Package registry for the host binding phase.
//! This provides a minimal type-erased container for constructed packages.

use crate::capabilities::CapabilityClass;
use crate::manifest::PackageKind;
use serde::Serialize;
use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt::Debug;

/// What a package tells the host it provides.
#[derive(Debug, Clone, Serialize)]
pub struct PackageDescriptor {
    pub kind: PackageKind,
    /// Native module names the host bridge can call into.
    pub modules: Vec<Cow<'static, str>>,
    /// View component names the host can mount.
    pub components: Vec<Cow<'static, str>>,
    pub classes: CapabilityClass,
}

impl PackageDescriptor {
    /// Descriptor with no capabilities of the given kind; builder-style
    /// helpers fill in the rest.
    #[must_use]
    pub const fn new(kind: PackageKind) -> Self {
        Self { kind, modules: Vec::new(), components: Vec::new(), classes: CapabilityClass::empty() }
    }

    #[must_use]
    pub fn module(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.modules.push(name.into());
        self.classes |= CapabilityClass::MODULES;
        self
    }

    #[must_use]
    pub fn component(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.components.push(name.into());
        self.classes |= CapabilityClass::COMPONENTS;
        self
    }

    #[must_use]
    pub const fn turbo(mut self) -> Self {
        self.classes = self.classes.union(CapabilityClass::TURBO);
        self
    }
}

/// Capability contract every package exposes to the host.
pub trait Capabilities {
    fn descriptor(&self) -> PackageDescriptor;
}

/// Marker trait for package state that can be shared across threads.
pub trait Package: Capabilities + Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for one constructed package.
#[derive(Debug)]
pub struct RegisteredPackage {
    pub id: TypeId,
    pub kind: PackageKind,
    pub state: Box<dyn Package>,
}

impl RegisteredPackage {
    /// Create a new registered package from a concrete state.
    pub fn new<T: Package>(kind: PackageKind, state: T) -> Self {
        Self { id: TypeId::of::<T>(), kind, state: Box::new(state) }
    }

    /// Capability descriptor of the wrapped state.
    #[must_use]
    pub fn descriptor(&self) -> PackageDescriptor {
        self.state.descriptor()
    }
}
