//! Shared builders for loop integration tests

use std::time::Duration;

use sentry::buzzer::BuzzerCommand;
use sentry::types::EvaluationPolicy;
use sentry::{SentryError, SentrySettings};
use shared::{CallFailure, Detection};

/// Detection with a confidence score
pub fn detection(class_name: &str, confidence: f64) -> Detection {
    Detection::new(class_name, confidence)
}

/// Settings tuned for fast test runs: person policy, millisecond poll delay
pub fn test_settings(total_iterations: u32) -> SentrySettings {
    SentrySettings {
        camera_name: "cam".to_string(),
        policy: EvaluationPolicy {
            confidence_threshold: 0.8,
            target_class: "person".to_string(),
            case_insensitive: true,
        },
        command: BuzzerCommand::default(),
        total_iterations,
        poll_interval: Duration::from_millis(1),
    }
}

/// Transient vision failure for injecting into detector mocks
pub fn vision_failure() -> SentryError {
    SentryError::VisionError {
        service: "vision".to_string(),
        reason: CallFailure::Transport("connection reset".to_string()),
    }
}

/// Actuator failure for injecting into actuator mocks
pub fn actuator_failure() -> SentryError {
    SentryError::ActuatorError {
        component: "piezo".to_string(),
        reason: CallFailure::Busy,
    }
}
