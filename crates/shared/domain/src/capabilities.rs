use crate::constants::{COMPONENTS, MODULES, TURBO};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Capability classes a package may expose to the host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CapabilityClass: u32 {
        const MODULES = 1 << 0;
        const COMPONENTS = 1 << 1;
        const TURBO = 1 << 2;

        const ALL = Self::MODULES.bits() | Self::COMPONENTS.bits() | Self::TURBO.bits();
    }
}

impl From<&str> for CapabilityClass {
    fn from(s: &str) -> Self {
        match s {
            MODULES => Self::MODULES,
            COMPONENTS => Self::COMPONENTS,
            TURBO => Self::TURBO,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for CapabilityClass {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for CapabilityClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for CapabilityClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
