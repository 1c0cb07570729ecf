use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a package constructor may read at registration time.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostContextInner {
    pub runtime: RuntimeConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped context for inexpensive threading into every package
/// constructor. Read-only from the registry's perspective; the host owns its
/// lifecycle.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct HostContext {
    #[serde(flatten, default)]
    inner: Arc<HostContextInner>,
}

impl Deref for HostContext {
    type Target = HostContextInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for HostContext {
    fn deref_mut(&mut self) -> &mut HostContextInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Host runtime identity and locale.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub name: String,
    /// BCP 47 language tag handed to localization packages.
    pub locale: String,
}

/// Storage roots packages may capture (none of them is touched during
/// registration).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub cache_dir: PathBuf,
}

/// Logging knobs consumed by the host binary, not by packages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { name: "bindery".to_owned(), locale: "en-US".to_owned() }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data"), cache_dir: PathBuf::from("cache") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, path: None }
    }
}
