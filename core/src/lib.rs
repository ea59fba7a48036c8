//! Smoke-test core for a remote A2A agent service.
//!
//! # Overview
//! Fetches the agent card, checks health, and invokes the JSON-RPC
//! `greeting` method, printing each result. Requests are built and parsed
//! as plain data (host-does-IO pattern); a `Transport` performs the network
//! round-trip, so the whole flow is deterministic under test.
//!
//! # Design
//! - `AgentClient` is stateless and holds only `base_url`.
//! - Response bodies become a `Payload`: JSON when it parses, raw text
//!   otherwise. Only transport failures are errors.
//! - Each check reports a `CheckOutcome`; `runner::run` aborts after a
//!   failed or empty card check and otherwise runs all three.

pub mod check;
pub mod client;
pub mod console;
pub mod error;
pub mod http;
pub mod runner;
pub mod transport;
pub mod types;

pub use check::{run_check, Check, CheckOutcome};
pub use client::AgentClient;
pub use console::Console;
pub use error::ProbeError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use runner::{run, AbortCause, ProbeReport};
pub use transport::Transport;
pub use types::{JsonRpcRequest, Payload};
