//! Sentry error types

use shared::CallFailure;
use thiserror::Error;

/// Result type for sentry operations
pub type SentryResult<T> = Result<T, SentryError>;

/// Sentry error types
#[derive(Error, Debug)]
pub enum SentryError {
    #[error("Machine connection error: {message}")]
    ConnectionError { message: String },

    #[error("Vision request failed: {service} - {reason}")]
    VisionError { service: String, reason: CallFailure },

    #[error("Actuator command failed: {component} - {reason}")]
    ActuatorError { component: String, reason: CallFailure },
}
