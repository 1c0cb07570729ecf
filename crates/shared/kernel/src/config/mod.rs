use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to config-crate results.
pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base file**: loads settings from a file (e.g. `host.toml`). If no
///    path is provided, it defaults to `"host"` in the working directory.
/// 2. **Environment overrides**: overlays values from variables prefixed with
///    `BINDERY__`. Nested structures use double underscores (e.g.
///    `BINDERY__RUNTIME__LOCALE` maps to `runtime.locale`).
///
/// # Errors
/// Returns an error if the file cannot be found or its content does not match
/// the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_from(path, env_overrides())
}

/// The `BINDERY__` environment overlay used by [`load_config`].
///
/// Exposed so callers can supply a pre-built overlay, e.g. a synthetic
/// variable map via [`Environment::source`].
#[must_use]
pub fn env_overrides() -> Environment {
    Environment::with_prefix("BINDERY").separator("__").convert_case(config::Case::Snake)
}

/// Same layering as [`load_config`] with an explicit environment overlay.
///
/// # Errors
/// Returns an error if the file cannot be found or its content does not match
/// the structure of type `T`.
pub fn load_config_from<T>(
    path: Option<impl AsRef<Path>>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("host"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(env);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
