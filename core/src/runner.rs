//! Sequencing of the three checks.
//!
//! # Design
//! The card check gates the run: if it produces no payload, or a payload
//! that is empty in the JavaScript sense (see `Payload::is_truthy`), health
//! and greeting are skipped and the report is `Aborted`. Otherwise health and
//! greeting both run regardless of their own outcomes. Checks execute one
//! after another on the caller's thread.

use std::io::Write;

use crate::check::{run_check, Check, CheckOutcome};
use crate::client::AgentClient;
use crate::console::Console;
use crate::error::ProbeError;
use crate::transport::Transport;
use crate::types::Payload;

pub const TITLE: &str = "🤖 A2A HelloWorld Agent Card Fetcher";
pub const DONE_BANNER: &str = "✅ All tests completed successfully!";

const RULE_WIDTH: usize = 50;

/// Why the run stopped after the card check.
#[derive(Debug)]
pub enum AbortCause {
    /// The card request did not complete.
    CardFailed(ProbeError),
    /// The card arrived but was empty: a blank body, `null`, `false`, `0` or `""`.
    EmptyCard(Payload),
}

/// How a probe run ended.
#[derive(Debug)]
pub enum ProbeReport {
    /// Nothing after the card check was attempted.
    Aborted { cause: AbortCause },
    Completed {
        card: Payload,
        health: CheckOutcome,
        greeting: CheckOutcome,
    },
}

impl ProbeReport {
    /// Process exit status: completion counts as success even when health or
    /// greeting failed individually.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProbeReport::Aborted { .. } => 1,
            ProbeReport::Completed { .. } => 0,
        }
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Probe the agent behind `client` and print the report to `console`.
pub fn run<T, O, E>(client: &AgentClient, transport: &T, console: &mut Console<O, E>) -> ProbeReport
where
    T: Transport,
    O: Write,
    E: Write,
{
    console.line(TITLE);
    console.line(&format!("🌐 Testing agent at: {}", client.base_url()));
    console.line(&rule());

    let card = match run_check(Check::Card, client, transport, console) {
        CheckOutcome::Passed(card) if card.is_truthy() => card,
        CheckOutcome::Passed(card) => {
            tracing::info!("agent card is empty, skipping remaining checks");
            return ProbeReport::Aborted {
                cause: AbortCause::EmptyCard(card),
            };
        }
        CheckOutcome::Failed(err) => {
            tracing::info!("card check failed, skipping remaining checks");
            return ProbeReport::Aborted {
                cause: AbortCause::CardFailed(err),
            };
        }
    };

    console.line(&format!("\n{}", rule()));
    let health = run_check(Check::Health, client, transport, console);

    console.line(&format!("\n{}", rule()));
    let greeting = run_check(Check::Greeting, client, transport, console);

    console.line(&format!("\n{DONE_BANNER}"));
    ProbeReport::Completed {
        card,
        health,
        greeting,
    }
}
