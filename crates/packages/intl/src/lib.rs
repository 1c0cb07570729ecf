//! Localization package slice: exposes the host locale and formatting info.
mod error;

pub use crate::error::IntlError;
use bindery_kernel::prelude::*;

/// Locale/formatting info provider.
#[bindery_derive::package]
pub struct Localize {
    pub locale: String,
}

impl Capabilities for Localize {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::Localize).module("Localize")
    }
}

/// Initialize the localization package.
///
/// # Errors
/// Returns [`IntlError::InvalidLocale`] if the context carries an empty
/// locale tag.
pub fn init_localize(ctx: &HostContext) -> Result<RegisteredPackage, IntlError> {
    let locale = ctx.runtime.locale.trim();
    if locale.is_empty() {
        return Err(IntlError::InvalidLocale(ctx.runtime.locale.clone()));
    }
    tracing::info!(%locale, "Localize package initialized");

    let handle = Localize::new(LocalizeInner { locale: locale.to_owned() });
    Ok(RegisteredPackage::new(PackageKind::Localize, handle))
}
