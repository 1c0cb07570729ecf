//! Kernel utilities shared across package slices.
//! Keep this crate lightweight; it re-exports the domain model and ergonomic
//! helpers for configuration loading.
//!
//! ## Config loading
//! ```rust,ignore
//! use bindery_kernel::config::load_config;
//! let ctx: bindery_kernel::domain::context::HostContext =
//!     load_config(Some("host")).unwrap_or_default();
//! ```

pub mod config;
pub mod prelude;

pub use bindery_domain as domain;
