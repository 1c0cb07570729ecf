//! Media package slices: inline pdf viewer, image picker, and the system
//! share sheet.
mod error;

pub use crate::error::MediaError;
use bindery_kernel::prelude::*;

/// Inline pdf viewer component.
#[bindery_derive::package]
pub struct PdfView {}

impl Capabilities for PdfView {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::PdfView).component("PdfView")
    }
}

/// Initialize the pdf-view package.
///
/// # Errors
///
pub fn init_pdf_view(_ctx: &HostContext) -> Result<RegisteredPackage, MediaError> {
    tracing::info!("PdfView package initialized");

    let handle = PdfView::new(PdfViewInner {});
    Ok(RegisteredPackage::new(PackageKind::PdfView, handle))
}

/// Camera-roll/image picker dialog bridge.
#[bindery_derive::package]
pub struct ImagePicker {}

impl Capabilities for ImagePicker {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::ImagePicker).module("ImagePicker")
    }
}

/// Initialize the image-picker package.
///
/// # Errors
///
pub fn init_image_picker(_ctx: &HostContext) -> Result<RegisteredPackage, MediaError> {
    tracing::info!("ImagePicker package initialized");

    let handle = ImagePicker::new(ImagePickerInner {});
    Ok(RegisteredPackage::new(PackageKind::ImagePicker, handle))
}

/// System share sheet.
#[bindery_derive::package]
pub struct Share {}

impl Capabilities for Share {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::Share).module("Share")
    }
}

/// Initialize the share package.
///
/// # Errors
///
pub fn init_share(_ctx: &HostContext) -> Result<RegisteredPackage, MediaError> {
    tracing::info!("Share package initialized");

    let handle = Share::new(ShareInner {});
    Ok(RegisteredPackage::new(PackageKind::Share, handle))
}
