//! Tests for the machine service implementations
//!
//! Each service is exercised against a wiremock machine: response decoding,
//! wire payload shape, and the failure-kind mapping.


use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::SentryConfig;
use crate::services::machine_session::MachineSession;

/// Config pointing at a mock machine
pub fn config_for(server: &MockServer) -> SentryConfig {
    SentryConfig {
        robot_address: server.uri(),
        api_key: "test-key".to_string(),
        api_key_id: "test-key-id".to_string(),
        vision_name: "vision".to_string(),
        camera_name: "cam".to_string(),
        piezo_name: "piezo".to_string(),
    }
}

/// Mount the status probe and open a session against the mock machine
pub async fn connected_session(server: &MockServer, timeout: Duration) -> MachineSession {
    Mock::given(method("GET"))
        .and(path("/machine/status"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;

    MachineSession::connect(&config_for(server), timeout)
        .await
        .expect("session should connect")
}
