//! Error types for the agent probe.
//!
//! # Design
//! Only two things can go wrong while probing: the request body cannot be
//! encoded, or the transport fails to complete the round-trip. A body that
//! is not JSON is a valid raw-text payload, never an error, and the HTTP
//! status is reported rather than judged.

use thiserror::Error;

/// Errors produced while building or executing a probe request.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// DNS, connect, TLS, timeout or body-read failure in the transport.
    #[error("{0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ProbeError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ProbeError::Transport(err.to_string())
    }
}
