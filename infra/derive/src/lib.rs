#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the package slice pattern.
//! Consuming crates must depend on `bindery-kernel`, which the generated code
//! references by path.

mod macros;

use proc_macro::TokenStream;
use syn::{ItemStruct, parse_macro_input};

/// Attribute macro to define a native package handle.
///
/// This macro transforms a struct into the full package pattern:
/// 1. Generates an `...Inner` struct holding the declared fields.
/// 2. Generates a thread-safe `Arc` wrapper with shared-ownership `Clone`.
/// 3. Implements `Deref` for transparent access to the inner state.
/// 4. Implements `Package` for registration with the host.
///
/// The capability contract is not generated: the author supplies an
/// `impl Capabilities for ...` next to the struct, describing the native
/// modules and view components the package provides.
///
/// # Example
/// ```rust,ignore
/// use bindery_kernel::prelude::*;
///
/// #[bindery_derive::package]
/// pub struct WebView {
///     pub cache_dir: std::path::PathBuf,
/// }
///
/// impl Capabilities for WebView {
///     fn descriptor(&self) -> PackageDescriptor {
///         PackageDescriptor::new(PackageKind::WebView).component("WebView")
///     }
/// }
///
/// fn init(ctx: &HostContext) -> WebView {
///     WebView::new(WebViewInner { cache_dir: ctx.storage.cache_dir.clone() })
/// }
/// ```
#[proc_macro_attribute]
pub fn package(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::package::expand_package(input).into()
}
