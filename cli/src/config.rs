//! Startup configuration, parsed from the command line.

use std::time::Duration;

use clap::Parser;

/// Hosted HelloWorld agent probed when no target is given.
pub const DEFAULT_AGENT_URL: &str = "https://a2a-helloworld-1dd6ef1d53ae.herokuapp.com";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "agent-probe",
    version,
    about = "Smoke-test a remote A2A agent: card, health and JSON-RPC greeting"
)]
pub struct Cli {
    /// Base URL of the agent service
    #[arg(value_name = "TARGET", default_value = DEFAULT_AGENT_URL)]
    pub target: String,

    /// Per-request timeout in seconds; the transport default applies when omitted
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
