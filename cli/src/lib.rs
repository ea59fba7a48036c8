//! Command-line front end for the agent probe.
//!
//! Parses the target, wires logging, and supplies the ureq-backed
//! `Transport` that `probe_core::run` drives.

pub mod config;
pub mod logging;
pub mod transport;

pub use config::{Cli, DEFAULT_AGENT_URL};
pub use transport::UreqTransport;
