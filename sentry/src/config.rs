//! Environment configuration

use std::env;

/// Connection endpoint, credential pair, and resource names, read once at
/// process start.
///
/// Absent keys default to empty strings; the machine collaborators fail at
/// call time rather than at configuration time.
#[derive(Debug, Clone, Default)]
pub struct SentryConfig {
    /// Machine endpoint, with or without a scheme
    pub robot_address: String,
    pub api_key: String,
    pub api_key_id: String,
    /// Name of the vision service on the machine
    pub vision_name: String,
    /// Name of the camera the vision service reads from
    pub camera_name: String,
    /// Name of the piezo buzzer component
    pub piezo_name: String,
}

impl SentryConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            robot_address: env::var("ROBOT_ADDRESS").unwrap_or_default(),
            api_key: env::var("ROBOT_API_KEY").unwrap_or_default(),
            api_key_id: env::var("ROBOT_API_KEY_ID").unwrap_or_default(),
            vision_name: env::var("VISION_NAME").unwrap_or_default(),
            camera_name: env::var("CAMERA_NAME").unwrap_or_default(),
            piezo_name: env::var("PIEZO_NAME").unwrap_or_default(),
        }
    }
}
