//! Generic actuator component client

use async_trait::async_trait;
use serde_json::Value;

use shared::CallFailure;

use crate::error::{SentryError, SentryResult};
use crate::services::machine_session::MachineSession;
use crate::services::{classify_status, classify_transport};
use crate::traits::ActuatorService;

/// Actuator backed by a named generic component on the machine
#[derive(Debug, Clone)]
pub struct HttpActuatorService {
    session: MachineSession,
    component_name: String,
}

impl HttpActuatorService {
    /// Resolve the named generic component from an established session
    pub fn from_session(session: &MachineSession, component_name: impl Into<String>) -> Self {
        Self {
            session: session.clone(),
            component_name: component_name.into(),
        }
    }

    fn actuator_error(&self, reason: CallFailure) -> SentryError {
        SentryError::ActuatorError {
            component: self.component_name.clone(),
            reason,
        }
    }
}

#[async_trait]
impl ActuatorService for HttpActuatorService {
    async fn do_command(&self, payload: Value) -> SentryResult<Value> {
        let path = format!("components/generic/{}/do_command", self.component_name);
        let url = self
            .session
            .base_url()
            .join(&path)
            .map_err(|e| self.actuator_error(CallFailure::InvalidPayload(e.to_string())))?;

        let response = self
            .session
            .client()
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.actuator_error(classify_transport(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.actuator_error(classify_status(status.as_u16(), &self.component_name)));
        }

        response.json().await.map_err(|e| {
            self.actuator_error(CallFailure::InvalidPayload(format!(
                "Failed to parse command response: {e}"
            )))
        })
    }
}
