use std::time::Duration;

use log::{debug, warn};

use super::{ExecutionBackend, RunRequest, RunResponse};
use crate::core::error::{DiamondError, TransportFailure};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/run";

/// Blocking JSON-over-HTTP client for the interpreter's `/run` endpoint.
pub struct HttpBackend {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DiamondError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportFailure::Network(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ExecutionBackend for HttpBackend {
    fn name(&self) -> &'static str { "http" }

    fn execute(&self, code: &str) -> Result<String, DiamondError> {
        debug!("POST {} ({} bytes)", self.endpoint, code.len());
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&RunRequest { code })
            .send()
            .map_err(|e| TransportFailure::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            warn!("{} answered {}", self.endpoint, status);
            let body = match resp.text() {
                Ok(body) => body,
                Err(e) => {
                    warn!("{}: could not read error body: {e}", self.endpoint);
                    format!("<unreadable body: {e}>")
                }
            };
            return Err(TransportFailure::Status { status: status.as_u16(), body }.into());
        }
        let text = resp
            .text()
            .map_err(|e| TransportFailure::Network(e.to_string()))?;
        let parsed: RunResponse = serde_json::from_str(&text)
            .map_err(|e| TransportFailure::MalformedBody(e.to_string()))?;
        Ok(parsed.output)
    }
}
