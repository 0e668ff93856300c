//! Machine-vision sentry
//!
//! Connects to a remote machine, polls its object-detection service for a
//! bounded number of cycles, and sounds a piezo buzzer whenever a detection
//! matches the configured class/confidence policy. Failures inside a cycle
//! are isolated and logged; the loop always advances.

pub mod buzzer;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod sentry_impl;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{SentryError, SentryResult};
pub use sentry_impl::{Sentry, SentrySettings};
pub use traits::*;
pub use types::*;
pub use services::*;
