//! Stateless HTTP request builder and response parser for the agent service.
//!
//! # Design
//! `AgentClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint has a `build_*` method producing an `HttpRequest`;
//! every response goes through the same `parse`, which never fails. The
//! caller executes the round-trip in between, through a `Transport`.

use serde_json::{json, Value};

use crate::error::ProbeError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{JsonRpcRequest, Payload};

pub const CARD_PATH: &str = "/agent/card";
pub const HEALTH_PATH: &str = "/agent/health";
pub const JSONRPC_PATH: &str = "/jsonrpc";

pub const USER_AGENT: &str = "A2A-Agent-Tester/1.0";

pub const GREETING_METHOD: &str = "greeting";
pub const GREETING_ID: u64 = 1;

/// Synchronous, stateless client for the agent endpoints.
///
/// `base_url` is kept exactly as configured; a trailing `/` is dropped only
/// when joining it with an endpoint path. A path in the base URL is kept, so
/// an agent mounted under a prefix is reached at `{prefix}/agent/card`.
#[derive(Debug, Clone)]
pub struct AgentClient {
    base_url: String,
}

impl AgentClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path` with the fixed JSON content type and
    /// user-agent headers. `body`, when given, is serialized as the payload.
    pub fn build_request(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<&Value>,
    ) -> Result<HttpRequest, ProbeError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ProbeError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.base_url.trim_end_matches('/')),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("user-agent".to_string(), USER_AGENT.to_string()),
            ],
            body,
        })
    }

    pub fn build_card(&self) -> Result<HttpRequest, ProbeError> {
        self.build_request(CARD_PATH, HttpMethod::Get, None)
    }

    pub fn build_health(&self) -> Result<HttpRequest, ProbeError> {
        self.build_request(HEALTH_PATH, HttpMethod::Get, None)
    }

    /// Build a JSON-RPC 2.0 call against the agent's RPC endpoint.
    pub fn build_jsonrpc(
        &self,
        method: &str,
        params: Value,
        id: u64,
    ) -> Result<HttpRequest, ProbeError> {
        let envelope = serde_json::to_value(JsonRpcRequest::new(method, params, id))
            .map_err(|e| ProbeError::Serialization(e.to_string()))?;
        self.build_request(JSONRPC_PATH, HttpMethod::Post, Some(&envelope))
    }

    pub fn build_greeting(&self) -> Result<HttpRequest, ProbeError> {
        self.build_jsonrpc(GREETING_METHOD, json!({}), GREETING_ID)
    }

    /// Turn a completed response into a payload. The status code is not
    /// interpreted; a body that is not JSON comes back as raw text.
    pub fn parse(&self, response: HttpResponse) -> Payload {
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "response received"
        );
        Payload::from_body(&response.body)
    }

    /// Build, execute and parse in one step.
    pub fn send<T: Transport>(
        &self,
        transport: &T,
        request: HttpRequest,
    ) -> Result<Payload, ProbeError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = transport.execute(&request)?;
        Ok(self.parse(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AgentClient {
        AgentClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_card_produces_correct_request() {
        let req = client().build_card().unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/agent/card");
        assert!(req.body.is_none());
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("user-agent"), Some("A2A-Agent-Tester/1.0"));
    }

    #[test]
    fn build_health_produces_correct_request() {
        let req = client().build_health().unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/agent/health");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_greeting_produces_jsonrpc_envelope() {
        let req = client().build_greeting().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/jsonrpc");
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"jsonrpc": "2.0", "method": "greeting", "params": {}, "id": 1})
        );
    }

    #[test]
    fn build_jsonrpc_carries_params_and_id() {
        let req = client()
            .build_jsonrpc("echo", json!({"text": "hi"}), 7)
            .unwrap();
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["method"], "echo");
        assert_eq!(body["params"]["text"], "hi");
        assert_eq!(body["id"], 7);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = AgentClient::new("https://agent.example.com/");
        let req = client.build_card().unwrap();
        assert_eq!(req.url, "https://agent.example.com/agent/card");
        assert_eq!(client.base_url(), "https://agent.example.com/");
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let client = AgentClient::new("https://gateway.example.com/agents/hello");
        assert_eq!(
            client.build_card().unwrap().url,
            "https://gateway.example.com/agents/hello/agent/card"
        );
        assert_eq!(
            client.build_greeting().unwrap().url,
            "https://gateway.example.com/agents/hello/jsonrpc"
        );
    }

    #[test]
    fn parse_json_body() {
        let payload = client().parse(response(200, r#"{"name":"hello"}"#));
        assert_eq!(payload, Payload::Json(json!({"name": "hello"})));
    }

    #[test]
    fn parse_ignores_status() {
        let payload = client().parse(response(503, r#"{"status":"DOWN"}"#));
        assert_eq!(payload.as_json().unwrap()["status"], "DOWN");
    }

    #[test]
    fn parse_text_body() {
        let payload = client().parse(response(200, "not json"));
        assert_eq!(payload, Payload::Text("not json".to_string()));
    }
}
