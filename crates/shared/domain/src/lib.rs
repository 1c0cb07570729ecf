//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or heavy logic. Just data and simple helpers.

pub mod capabilities;
pub mod constants;
pub mod context;
pub mod manifest;
pub mod registry;
