use std::process::ExitCode;

use agent_probe::{logging, Cli, UreqTransport};
use clap::Parser;
use probe_core::{AgentClient, Console};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let client = AgentClient::new(&cli.target);
    let transport = UreqTransport::new(cli.timeout());
    let mut console = Console::stdio();

    let report = probe_core::run(&client, &transport, &mut console);
    ExitCode::from(report.exit_code())
}
