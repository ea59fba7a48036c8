//! Stand-in for the A2A HelloWorld agent service.
//!
//! Serves the agent card, health status, and a JSON-RPC endpoint with the
//! same shapes as the hosted agent, so the probe can be exercised locally.

use std::{env, sync::Arc};

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const DEFAULT_PUBLIC_URL: &str = "https://a2a-helloworld-1dd6ef1d53ae.herokuapp.com";

const AGENT_NAME: &str = "HelloWorld A2A Agent";
const AGENT_DESCRIPTION: &str = "A simple A2A agent for testing connections on Heroku";
const AGENT_VERSION: &str = "1.0.0";
const PROTOCOL_VERSION: &str = "0.3.0";

pub const GREETING_MESSAGE: &str = "Hello from A2A HelloWorld Agent running on Heroku!";
pub const METHOD_NOT_FOUND: i64 = -32601;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    pub streaming: bool,
    pub push_notifications: bool,
    pub state_transition_history: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AgentSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub examples: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    pub url: String,
    pub version: String,
    pub documentation_url: String,
    pub capabilities: AgentCapabilities,
    pub default_input_modes: Vec<String>,
    pub default_output_modes: Vec<String>,
    pub skills: Vec<AgentSkill>,
    pub protocol_version: String,
    pub preferred_transport: String,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub method: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub id: Value,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Value,
}

fn skill(id: &str, name: &str, description: &str, tags: &[&str], examples: &[&str]) -> AgentSkill {
    AgentSkill {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        examples: examples.iter().map(|e| e.to_string()).collect(),
    }
}

pub fn skills() -> Vec<AgentSkill> {
    vec![
        skill("greeting", "Greeting", "Returns a greeting message", &["greeting"], &["hello", "hi"]),
        skill("echo", "Echo", "Echoes back the provided parameters", &["echo"], &["echo test"]),
        skill(
            "heroku-info",
            "Heroku Info",
            "Returns Heroku environment information",
            &["info", "heroku"],
            &["info"],
        ),
    ]
}

fn capabilities() -> AgentCapabilities {
    AgentCapabilities {
        streaming: false,
        push_notifications: false,
        state_transition_history: false,
    }
}

impl AgentCard {
    pub fn hello_world(url: &str) -> Self {
        AgentCard {
            name: AGENT_NAME.to_string(),
            description: AGENT_DESCRIPTION.to_string(),
            url: url.to_string(),
            version: AGENT_VERSION.to_string(),
            documentation_url: "https://github.com/bfalkowski/start-a2a-helloworld".to_string(),
            capabilities: capabilities(),
            default_input_modes: vec!["text".to_string()],
            default_output_modes: vec!["text".to_string()],
            skills: skills(),
            protocol_version: PROTOCOL_VERSION.to_string(),
            preferred_transport: "JSONRPC".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AgentState {
    pub public_url: Arc<str>,
}

pub fn app(public_url: &str) -> Router {
    let state = AgentState {
        public_url: Arc::from(public_url),
    };
    Router::new()
        .route("/", get(root))
        .route("/agent/card", get(agent_card))
        .route("/agent/extendedCard", get(agent_card))
        .route("/agent/authenticatedExtendedCard", get(agent_card))
        .route("/agent/health", get(health))
        .route("/jsonrpc", post(jsonrpc))
        .with_state(state)
}

pub async fn run(listener: TcpListener, public_url: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(public_url)).await
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "A2A HelloWorld Agent",
        "description": AGENT_DESCRIPTION,
        "version": AGENT_VERSION,
        "status": "UP",
        "endpoints": {
            "agent_discovery": [
                "/agent/card",
                "/agent/extendedCard",
                "/agent/authenticatedExtendedCard",
                "/agent/health"
            ],
            "jsonrpc": "/jsonrpc"
        }
    }))
}

async fn agent_card(State(state): State<AgentState>) -> Json<AgentCard> {
    Json(AgentCard::hello_world(&state.public_url))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "UP",
        "platform": "Heroku",
        "timestamp": now_millis()
    }))
}

async fn jsonrpc(
    State(state): State<AgentState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    tracing::debug!(method = %request.method, "jsonrpc call");
    let (result, error) = match dispatch(&request.method, request.params, &state) {
        Ok(result) => (Some(result), None),
        Err(error) => (None, Some(error)),
    };
    Json(JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        result,
        error,
        id: request.id,
    })
}

/// Resolve one JSON-RPC method to its result.
pub fn dispatch(method: &str, params: Value, state: &AgentState) -> Result<Value, JsonRpcError> {
    let result = match method {
        "agent.discover" => json!({
            "name": AGENT_NAME,
            "description": AGENT_DESCRIPTION,
            "version": AGENT_VERSION,
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": capabilities(),
            "skills": skills()
                .into_iter()
                .map(|s| json!({"id": s.id, "name": s.name, "description": s.description}))
                .collect::<Vec<_>>()
        }),
        "agent.info" => json!({
            "name": AGENT_NAME,
            "description": AGENT_DESCRIPTION,
            "version": AGENT_VERSION,
            "url": state.public_url.to_string(),
            "protocolVersion": PROTOCOL_VERSION
        }),
        "agent.getCapabilities" => json!({
            "streaming": false,
            "pushNotifications": false,
            "stateTransitionHistory": false,
            "supportedTransports": ["JSONRPC"],
            "supportedProtocols": ["A2A-0.3.0"]
        }),
        "agent.getSkills" => json!(skills()),
        "agent.health" => json!({
            "status": "UP",
            "platform": "Heroku",
            "timestamp": now_millis(),
            "version": AGENT_VERSION
        }),
        "agent.status" => json!({
            "status": "UP",
            "uptime": "running",
            "lastHealthCheck": now_millis(),
            "activeConnections": 0
        }),
        "greeting" => json!({ "message": GREETING_MESSAGE }),
        "echo" => json!({ "echo": params }),
        "heroku-info" => json!({
            "heroku_environment": {
                "dyno": env::var("DYNO").ok(),
                "release_version": env::var("HEROKU_RELEASE_VERSION").ok(),
                "slug_commit": env::var("HEROKU_SLUG_COMMIT").ok(),
                "port": env::var("PORT").ok()
            }
        }),
        other => {
            return Err(JsonRpcError {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {other}"),
            })
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AgentState {
        AgentState {
            public_url: Arc::from("http://localhost:3000"),
        }
    }

    #[test]
    fn card_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(AgentCard::hello_world("http://localhost:3000")).unwrap();
        assert_eq!(json["name"], "HelloWorld A2A Agent");
        assert_eq!(json["url"], "http://localhost:3000");
        assert_eq!(json["protocolVersion"], "0.3.0");
        assert_eq!(json["preferredTransport"], "JSONRPC");
        assert_eq!(json["capabilities"]["pushNotifications"], false);
        assert_eq!(json["skills"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn greeting_returns_message() {
        let result = dispatch("greeting", json!({}), &state()).unwrap();
        assert_eq!(result["message"], GREETING_MESSAGE);
    }

    #[test]
    fn echo_returns_params() {
        let result = dispatch("echo", json!({"a": 1}), &state()).unwrap();
        assert_eq!(result, json!({"echo": {"a": 1}}));
    }

    #[test]
    fn agent_info_uses_public_url() {
        let result = dispatch("agent.info", Value::Null, &state()).unwrap();
        assert_eq!(result["url"], "http://localhost:3000");
    }

    #[test]
    fn unknown_method_is_not_found() {
        let err = dispatch("nope", Value::Null, &state()).unwrap_err();
        assert_eq!(err.code, -32601);
        assert_eq!(err.message, "Method not found: nope");
    }

    #[test]
    fn request_params_and_id_are_optional() {
        let req: JsonRpcRequest = serde_json::from_str(r#"{"method":"greeting"}"#).unwrap();
        assert!(req.params.is_null());
        assert!(req.id.is_null());
    }
}
