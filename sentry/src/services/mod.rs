//! Machine service implementations

pub mod actuator;
pub mod machine_session;
pub mod vision;

#[cfg(test)]
pub mod tests;

pub use actuator::*;
pub use machine_session::*;
pub use vision::*;

use shared::CallFailure;

/// Map a reqwest error into the call-failure taxonomy.
/// Deadline overruns are reported as `Timeout`, everything else as transport.
pub(crate) fn classify_transport(error: reqwest::Error) -> CallFailure {
    if error.is_timeout() {
        CallFailure::Timeout
    } else {
        CallFailure::Transport(error.to_string())
    }
}

/// Map a non-success HTTP status into the call-failure taxonomy
pub(crate) fn classify_status(status: u16, resource: &str) -> CallFailure {
    match status {
        401 | 403 => CallFailure::AuthenticationFailed,
        404 => CallFailure::ResourceNotFound(resource.to_string()),
        409 => CallFailure::Busy,
        _ => CallFailure::ServerError(format!("HTTP {status}")),
    }
}
