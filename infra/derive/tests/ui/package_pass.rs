use bindery_kernel::prelude::*;
use std::path::PathBuf;

#[bindery_derive::package]
pub struct WebView {
    pub cache_dir: PathBuf,
}

impl Capabilities for WebView {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::WebView).component("WebView").module("WebViewModule")
    }
}

fn main() {
    let handle = WebView::new(WebViewInner { cache_dir: PathBuf::from("/tmp/cache") });

    // Deref reaches the inner state; Clone shares it.
    assert_eq!(handle.cache_dir, PathBuf::from("/tmp/cache"));
    let clone = handle.clone();
    assert_eq!(clone.cache_dir, handle.cache_dir);

    // Registration erases the concrete type but keeps it recoverable.
    let registered = RegisteredPackage::new(PackageKind::WebView, handle);
    assert_eq!(registered.id, std::any::TypeId::of::<WebView>());
    assert!(registered.state.as_any().downcast_ref::<WebView>().is_some());
    assert_eq!(registered.descriptor().components, vec!["WebView"]);
}
