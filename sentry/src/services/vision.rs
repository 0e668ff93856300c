//! Vision service client

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use shared::{CallFailure, Detection};

use crate::error::{SentryError, SentryResult};
use crate::services::machine_session::MachineSession;
use crate::services::{classify_status, classify_transport};
use crate::traits::DetectorService;

/// Detector backed by a named vision service on the machine
#[derive(Debug, Clone)]
pub struct HttpDetectorService {
    session: MachineSession,
    service_name: String,
}

#[derive(Debug, Deserialize)]
struct DetectionsResponse {
    detections: Vec<Detection>,
}

impl HttpDetectorService {
    /// Resolve the named vision service from an established session
    pub fn from_session(session: &MachineSession, service_name: impl Into<String>) -> Self {
        Self {
            session: session.clone(),
            service_name: service_name.into(),
        }
    }

    fn vision_error(&self, reason: CallFailure) -> SentryError {
        SentryError::VisionError {
            service: self.service_name.clone(),
            reason,
        }
    }
}

#[async_trait]
impl DetectorService for HttpDetectorService {
    async fn get_detections_from_camera(&self, camera_name: &str) -> SentryResult<Vec<Detection>> {
        let path = format!(
            "services/vision/{}/get_detections_from_camera",
            self.service_name
        );
        let url = self
            .session
            .base_url()
            .join(&path)
            .map_err(|e| self.vision_error(CallFailure::InvalidPayload(e.to_string())))?;

        let response = self
            .session
            .client()
            .post(url)
            .json(&json!({ "camera_name": camera_name }))
            .send()
            .await
            .map_err(|e| self.vision_error(classify_transport(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.vision_error(classify_status(status.as_u16(), &self.service_name)));
        }

        let body: DetectionsResponse = response.json().await.map_err(|e| {
            self.vision_error(CallFailure::InvalidPayload(format!(
                "Failed to parse detections: {e}"
            )))
        })?;

        Ok(body.detections)
    }
}
