//! Machine session bootstrap

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::info;
use url::Url;

use shared::SessionId;

use crate::config::SentryConfig;
use crate::error::{SentryError, SentryResult};

/// Authenticated handle to a remote machine.
///
/// Holds the normalized base URL and an HTTP client carrying the credential
/// headers and the per-request timeout. Named services are resolved from
/// this handle before the polling loop starts. Cloning is cheap; clones
/// share the underlying client.
#[derive(Debug, Clone)]
pub struct MachineSession {
    session_id: SessionId,
    base_url: Url,
    client: reqwest::Client,
}

impl MachineSession {
    /// Connect to the machine and verify the credentials with a status probe.
    ///
    /// An unreachable endpoint, a malformed address, or a rejected key pair
    /// is fatal; unlike in-loop failures it is not isolated.
    pub async fn connect(config: &SentryConfig, timeout: Duration) -> SentryResult<Self> {
        let base_url = normalize_address(&config.robot_address)?;
        let session_id = SessionId::new();

        let mut headers = HeaderMap::new();
        headers.insert("x-api-key-id", header_value(&config.api_key_id)?);
        headers.insert("x-api-key", header_value(&config.api_key)?);
        headers.insert("x-session-id", header_value(&session_id.to_string())?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| SentryError::ConnectionError {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        let status_url = base_url
            .join("machine/status")
            .map_err(|e| SentryError::ConnectionError {
                message: format!("Invalid machine address '{}': {e}", config.robot_address),
            })?;
        let response =
            client
                .get(status_url)
                .send()
                .await
                .map_err(|e| SentryError::ConnectionError {
                    message: format!("Machine unreachable at {base_url}: {e}"),
                })?;

        match response.status().as_u16() {
            200..=299 => {}
            401 | 403 => {
                return Err(SentryError::ConnectionError {
                    message: "Machine rejected the API key pair".to_string(),
                });
            }
            status => {
                return Err(SentryError::ConnectionError {
                    message: format!("Machine status probe failed: HTTP {status}"),
                });
            }
        }

        info!(session_id = %session_id, machine = %base_url, "Connected to machine");

        Ok(Self {
            session_id,
            base_url,
            client,
        })
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// Normalize the configured address into a base URL.
/// The scheme defaults to https; a trailing slash keeps `Url::join` rooted.
fn normalize_address(address: &str) -> SentryResult<Url> {
    let mut candidate = if address.contains("://") {
        address.to_string()
    } else {
        format!("https://{address}")
    };
    if !candidate.ends_with('/') {
        candidate.push('/');
    }

    Url::parse(&candidate).map_err(|e| SentryError::ConnectionError {
        message: format!("Invalid machine address '{address}': {e}"),
    })
}

fn header_value(value: &str) -> SentryResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| SentryError::ConnectionError {
        message: "Credential contains characters not valid in a header".to_string(),
    })
}
