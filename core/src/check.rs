//! The three probe checks: agent card, health, and the JSON-RPC greeting.
//!
//! # Design
//! A check never propagates its error. It prints a labeled result or a
//! labeled failure and hands back a `CheckOutcome`, which the runner uses
//! for control flow.

use std::io::Write;

use crate::client::AgentClient;
use crate::console::Console;
use crate::error::ProbeError;
use crate::http::HttpRequest;
use crate::transport::Transport;
use crate::types::Payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Card,
    Health,
    Greeting,
}

impl Check {
    pub fn progress(self) -> &'static str {
        match self {
            Check::Card => "📋 Fetching agent card...",
            Check::Health => "💚 Checking agent health...",
            Check::Greeting => "👋 Testing JSON-RPC greeting...",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Check::Card => "✅ Agent Card:",
            Check::Health => "✅ Health Status:",
            Check::Greeting => "✅ Greeting Response:",
        }
    }

    /// What was being attempted, as used in the failure line.
    pub fn action(self) -> &'static str {
        match self {
            Check::Card => "fetching agent card",
            Check::Health => "fetching agent health",
            Check::Greeting => "calling JSON-RPC greeting",
        }
    }

    pub fn build(self, client: &AgentClient) -> Result<HttpRequest, ProbeError> {
        match self {
            Check::Card => client.build_card(),
            Check::Health => client.build_health(),
            Check::Greeting => client.build_greeting(),
        }
    }
}

/// Result of a single check: the payload, or the reason there is none.
#[derive(Debug)]
pub enum CheckOutcome {
    Passed(Payload),
    Failed(ProbeError),
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed(_))
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            CheckOutcome::Passed(payload) => Some(payload),
            CheckOutcome::Failed(_) => None,
        }
    }

    pub fn into_result(self) -> Result<Payload, ProbeError> {
        match self {
            CheckOutcome::Passed(payload) => Ok(payload),
            CheckOutcome::Failed(err) => Err(err),
        }
    }
}

/// Run one check against the agent and print its outcome.
pub fn run_check<T, O, E>(
    check: Check,
    client: &AgentClient,
    transport: &T,
    console: &mut Console<O, E>,
) -> CheckOutcome
where
    T: Transport,
    O: Write,
    E: Write,
{
    console.line(check.progress());
    let result = check
        .build(client)
        .and_then(|request| client.send(transport, request));
    match result {
        Ok(payload) => {
            console.line(check.heading());
            console.line(&payload.pretty());
            CheckOutcome::Passed(payload)
        }
        Err(err) => {
            tracing::debug!(?check, error = %err, "check failed");
            console.error(&format!("❌ Error {}: {err}", check.action()));
            CheckOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;

    struct Fixed(Result<&'static str, &'static str>);

    impl Transport for Fixed {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ProbeError> {
            match self.0 {
                Ok(body) => Ok(HttpResponse {
                    status: 200,
                    headers: Vec::new(),
                    body: body.to_string(),
                }),
                Err(reason) => Err(ProbeError::Transport(reason.to_string())),
            }
        }
    }

    fn captured(console: Console<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = console.into_inner();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn passed_check_prints_heading_and_payload() {
        let client = AgentClient::new("http://localhost:3000");
        let mut console = Console::new(Vec::new(), Vec::new());
        let outcome = run_check(
            Check::Health,
            &client,
            &Fixed(Ok(r#"{"status":"UP"}"#)),
            &mut console,
        );
        assert!(outcome.is_passed());
        let (out, err) = captured(console);
        assert_eq!(
            out,
            "💚 Checking agent health...\n✅ Health Status:\n{\n  \"status\": \"UP\"\n}\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn failed_check_prints_reason_to_error_stream() {
        let client = AgentClient::new("http://localhost:3000");
        let mut console = Console::new(Vec::new(), Vec::new());
        let outcome = run_check(
            Check::Greeting,
            &client,
            &Fixed(Err("connection refused")),
            &mut console,
        );
        assert!(outcome.payload().is_none());
        let (out, err) = captured(console);
        assert_eq!(out, "👋 Testing JSON-RPC greeting...\n");
        assert_eq!(
            err,
            "❌ Error calling JSON-RPC greeting: connection refused\n"
        );
    }
}
