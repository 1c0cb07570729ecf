//! Motion package slices: the gesture recognizer and the UI-thread animation
//! driver.
mod error;

pub use crate::error::MotionError;
use bindery_kernel::prelude::*;

/// Gesture recognizer; owns the root view wrapper that intercepts touches.
#[bindery_derive::package]
pub struct GestureHandler {}

impl Capabilities for GestureHandler {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::GestureHandler)
            .module("GestureHandlerModule")
            .component("GestureHandlerRootView")
    }
}

/// Initialize the gesture-handler package.
///
/// # Errors
///
pub fn init_gesture_handler(_ctx: &HostContext) -> Result<RegisteredPackage, MotionError> {
    tracing::info!("GestureHandler package initialized");

    let handle = GestureHandler::new(GestureHandlerInner {});
    Ok(RegisteredPackage::new(PackageKind::GestureHandler, handle))
}

/// Animation driver running worklets on the UI thread; codegen-backed.
#[bindery_derive::package]
pub struct Reanimated {}

impl Capabilities for Reanimated {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::Reanimated).module("Reanimated").turbo()
    }
}

/// Initialize the animation-driver package.
///
/// # Errors
///
pub fn init_reanimated(_ctx: &HostContext) -> Result<RegisteredPackage, MotionError> {
    tracing::info!("Reanimated package initialized");

    let handle = Reanimated::new(ReanimatedInner {});
    Ok(RegisteredPackage::new(PackageKind::Reanimated, handle))
}
