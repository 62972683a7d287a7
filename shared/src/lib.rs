//! Calorie Advisor Shared Library
//!
//! This crate contains the calculator core and the request/response types
//! shared by the backend and WASM modules.

pub mod advice;
pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use advice::{Advice, Severity};
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
