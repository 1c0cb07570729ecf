//! View chrome package slices: safe-area insets, paged views, immersive mode.
mod error;

pub use crate::error::ViewError;
use bindery_kernel::prelude::*;

/// Safe-area inset provider. Registered first so its insets are available to
/// every component mounted after it.
#[bindery_derive::package]
pub struct SafeAreaView {}

impl Capabilities for SafeAreaView {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::SafeAreaView)
            .module("SafeAreaContext")
            .component("SafeAreaView")
            .component("SafeAreaProvider")
    }
}

/// Initialize the safe-area package.
///
/// # Errors
///
pub fn init_safe_area_view(_ctx: &HostContext) -> Result<RegisteredPackage, ViewError> {
    tracing::info!("SafeAreaView package initialized");

    let handle = SafeAreaView::new(SafeAreaViewInner {});
    Ok(RegisteredPackage::new(PackageKind::SafeAreaView, handle))
}

/// Horizontally paged view container.
#[bindery_derive::package]
pub struct ViewPager {}

impl Capabilities for ViewPager {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::ViewPager).component("ViewPager")
    }
}

/// Initialize the view-pager package.
///
/// # Errors
///
pub fn init_view_pager(_ctx: &HostContext) -> Result<RegisteredPackage, ViewError> {
    tracing::info!("ViewPager package initialized");

    let handle = ViewPager::new(ViewPagerInner {});
    Ok(RegisteredPackage::new(PackageKind::ViewPager, handle))
}

/// Fullscreen/immersive window mode toggles.
#[bindery_derive::package]
pub struct Immersive {}

impl Capabilities for Immersive {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::Immersive).module("Immersive")
    }
}

/// Initialize the immersive-mode package.
///
/// # Errors
///
pub fn init_immersive(_ctx: &HostContext) -> Result<RegisteredPackage, ViewError> {
    tracing::info!("Immersive package initialized");

    let handle = Immersive::new(ImmersiveInner {});
    Ok(RegisteredPackage::new(PackageKind::Immersive, handle))
}
