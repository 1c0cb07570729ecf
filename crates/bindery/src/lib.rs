//! Facade crate for `bindery` package slices and shared modules.
//! Re-exports domain/kernel primitives and aggregates package registration.
//! Keep this crate thin: it should compose other crates, not implement
//! package behavior.
//!
//! ## Usage
//! - Build a [`HostContext`] (usually from `host.toml`).
//! - Call [`get_packages`] during the host's module-loading phase; bind the
//!   returned handles in order.

mod resolve;

pub use crate::resolve::CapabilityIndex;
pub use bindery_domain as domain;
pub use bindery_kernel as kernel;

use bindery_domain::context::HostContext;
use bindery_domain::manifest::{DEFAULT_ORDER, PackageKind};
use bindery_domain::registry::RegisteredPackage;
use std::collections::BTreeSet;

/// Package family registry for runtime introspection.
pub mod packages {
    pub use bindery_fs as fs;
    pub use bindery_generated as generated;
    pub use bindery_intl as intl;
    pub use bindery_media as media;
    pub use bindery_motion as motion;
    pub use bindery_storage as storage;
    pub use bindery_view as view;
    pub use bindery_web as web;

    /// Package families compiled into this build.
    pub const ENABLED: &[&str] =
        &["view", "web", "storage", "fs", "media", "motion", "intl", "generated"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Result of one registry build.
pub type BuildResult = Result<Vec<RegisteredPackage>, Box<dyn std::error::Error>>;

/// Construct the default package set for the host.
///
/// Equivalent to [`build`] with [`DEFAULT_ORDER`]: every known package kind,
/// once, in declared order.
///
/// # Errors
/// Returns the first package construction failure, unmodified; packages after
/// the failing one are not constructed.
pub fn get_packages(ctx: &HostContext) -> BuildResult {
    build(ctx, &DEFAULT_ORDER)
}

/// Construct packages in an explicit order.
///
/// Each listed kind is constructed exactly once per entry, in listed order,
/// from the shared context. No state is retained between calls; repeated
/// builds yield fresh instances.
///
/// A kind listed more than once is not an error: both instances are
/// constructed and registered (capability precedence is resolved host-side,
/// last-registered-wins), but the duplicate is flagged with a warning since
/// it is usually a composition mistake.
///
/// # Errors
/// Returns the first package construction failure, unmodified; packages after
/// the failing one are not constructed.
pub fn build(ctx: &HostContext, order: &[PackageKind]) -> BuildResult {
    let mut registry = Vec::with_capacity(order.len());
    let mut seen = BTreeSet::new();

    for &kind in order {
        if !seen.insert(kind) {
            tracing::warn!(
                package = %kind,
                "Package listed more than once; registering a second instance"
            );
        }
        registry.push(construct(ctx, kind)?);
    }

    Ok(registry)
}

/// Exhaustive constructor dispatch over the closed kind set. Adding a
/// [`PackageKind`] without wiring its constructor fails to compile here.
fn construct(
    ctx: &HostContext,
    kind: PackageKind,
) -> Result<RegisteredPackage, Box<dyn std::error::Error>> {
    let package = match kind {
        PackageKind::SafeAreaView => packages::view::init_safe_area_view(ctx)?,
        PackageKind::AsyncStorage => packages::storage::init_async_storage(ctx)?,
        PackageKind::WebView => packages::web::init_web_view(ctx)?,
        PackageKind::Cookies => packages::web::init_cookies(ctx)?,
        PackageKind::GestureHandler => packages::motion::init_gesture_handler(ctx)?,
        PackageKind::BlobUtil => packages::fs::init_blob_util(ctx)?,
        PackageKind::Fs => packages::fs::init_fs(ctx)?,
        PackageKind::Localize => packages::intl::init_localize(ctx)?,
        PackageKind::ViewPager => packages::view::init_view_pager(ctx)?,
        PackageKind::PdfView => packages::media::init_pdf_view(ctx)?,
        PackageKind::Reanimated => packages::motion::init_reanimated(ctx)?,
        PackageKind::Share => packages::media::init_share(ctx)?,
        PackageKind::SecureKeyStore => packages::storage::init_secure_key_store(ctx)?,
        PackageKind::SecureRandom => packages::storage::init_secure_random(ctx)?,
        PackageKind::Immersive => packages::view::init_immersive(ctx)?,
        PackageKind::FileViewer => packages::fs::init_file_viewer(ctx)?,
        PackageKind::DocumentPicker => packages::fs::init_document_picker(ctx)?,
        PackageKind::ImagePicker => packages::media::init_image_picker(ctx)?,
        PackageKind::Generated => packages::generated::init_generated(ctx)?,
    };
    Ok(package)
}
