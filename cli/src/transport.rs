//! Blocking HTTP(S) transport backed by ureq.

use std::time::Duration;

use probe_core::{HttpMethod, HttpRequest, HttpResponse, ProbeError, Transport};

/// Executes probe requests with a single ureq agent.
///
/// Status codes are returned as data rather than errors; only failures to
/// complete the exchange (DNS, connect, TLS, timeout, body read) become
/// `ProbeError::Transport`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ProbeError> {
        let sent = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(request.url.as_str());
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(request.url.as_str());
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = sent.map_err(ProbeError::transport)?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(ProbeError::transport)?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
