//! Shared error vocabulary for remote machine calls

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reasons for calls to the machine's services.
///
/// Both the vision service and the actuator report out of this taxonomy.
/// A call that overran its deadline is `Timeout`, never `Transport`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallFailure {
    /// Machine rejected the API key pair
    #[error("authentication rejected")]
    AuthenticationFailed,
    /// Request exceeded the configured deadline
    #[error("request timed out")]
    Timeout,
    /// Network or connection error
    #[error("transport error: {0}")]
    Transport(String),
    /// Named resource does not exist on the machine
    #[error("resource not found: {0}")]
    ResourceNotFound(String),
    /// Machine could not decode the request, or sent a body we could not decode
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    /// Component is busy executing another command
    #[error("component busy")]
    Busy,
    /// Server-side error from the machine
    #[error("server error: {0}")]
    ServerError(String),
}
