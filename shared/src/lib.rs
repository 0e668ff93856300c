//! Shared types for the machine sentry
//!
//! Contains the wire-level types exchanged with the remote machine, the
//! per-call failure taxonomy both services report, and tracing setup.
//! Component-internal types (policy, outcomes, state) are kept in the
//! sentry crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
