//! Reusable hooks.

pub mod refreshable_resource;

pub use refreshable_resource::{use_refresh_resource, use_refreshable_resource};
