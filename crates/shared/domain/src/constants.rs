//! Stable textual names shared between config files, logs, and capability lookups.

/// Capability class: native modules callable from the host bridge.
pub const MODULES: &str = "modules";
/// Capability class: view components the host can mount.
pub const COMPONENTS: &str = "components";
/// Capability class: codegen-backed turbo-module specs.
pub const TURBO: &str = "turbo";
