//! Blocking HTTP transport posting forms to the configuration endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::backend::FormTransport;
use crate::backend::errors::{BackendError, BackendResult};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| BackendError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FormTransport for HttpTransport {
    fn post_form(&self, body: &str) -> BackendResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(body.to_string())
            .send()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        response
            .text()
            .map_err(|e| BackendError::Transport(e.to_string()))
    }
}
