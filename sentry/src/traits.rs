//! Service trait definitions for dependency injection

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SentryResult;
use shared::Detection;

/// Object-detection service resolved by name from the machine session
#[mockall::automock]
#[async_trait]
pub trait DetectorService: Send + Sync {
    /// Fetch the detections for the current frame of the named camera
    async fn get_detections_from_camera(&self, camera_name: &str) -> SentryResult<Vec<Detection>>;
}

/// Generic hardware component accepting structured commands
#[mockall::automock]
#[async_trait]
pub trait ActuatorService: Send + Sync {
    /// Execute a command on the component, awaited to completion.
    /// The structured response map is returned verbatim.
    async fn do_command(&self, payload: Value) -> SentryResult<Value>;
}
