//! Sentry state management

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::SentryState;

/// Shared sentry state wrapper
pub type SharedSentryState = Arc<RwLock<SentryState>>;

/// Create new shared sentry state
pub fn create_shared_state(state: SentryState) -> SharedSentryState {
    Arc::new(RwLock::new(state))
}
