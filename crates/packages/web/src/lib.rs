//! Web package slices: embedded webview and the cookie manager backing it.
mod error;

pub use crate::error::WebError;
use bindery_kernel::prelude::*;
use std::path::PathBuf;

/// Embedded webview. The cache directory is captured at registration time;
/// nothing is created on disk until the host actually mounts a webview.
#[bindery_derive::package]
pub struct WebView {
    pub cache_dir: PathBuf,
}

impl Capabilities for WebView {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::WebView).module("WebViewModule").component("WebView")
    }
}

/// Initialize the webview package.
///
/// # Errors
///
pub fn init_web_view(ctx: &HostContext) -> Result<RegisteredPackage, WebError> {
    tracing::info!("WebView package initialized");

    let handle = WebView::new(WebViewInner { cache_dir: ctx.storage.cache_dir.clone() });
    Ok(RegisteredPackage::new(PackageKind::WebView, handle))
}

/// Cookie store shared between webviews and the host's HTTP stack.
#[bindery_derive::package]
pub struct Cookies {
    pub jar_dir: PathBuf,
}

impl Capabilities for Cookies {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::Cookies).module("CookieManager")
    }
}

/// Initialize the cookie-manager package.
///
/// # Errors
///
pub fn init_cookies(ctx: &HostContext) -> Result<RegisteredPackage, WebError> {
    tracing::info!("Cookies package initialized");

    let handle = Cookies::new(CookiesInner { jar_dir: ctx.storage.cache_dir.clone() });
    Ok(RegisteredPackage::new(PackageKind::Cookies, handle))
}
