//! Configuration module for stylesheet collection
//!
//! This module provides the `GetCssOptions` struct and its builder for
//! configuring how pages and stylesheets are fetched.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::GetCssOptionsBuilder;
pub use types::GetCssOptions;
