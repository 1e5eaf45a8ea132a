//! Unified error types for the crate.
//!
//! This module provides a unified error type that encompasses errors from the
//! OPC package layer and the PresentationML layer, presenting a consistent API
//! to the fixture builder.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
