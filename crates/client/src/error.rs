// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client error types.

use playd_wire::WireError;
use thiserror::Error;

/// Errors from session operations.
///
/// Nothing is retried or swallowed internally: every decode and
/// connection failure propagates to the immediate caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Protocol decode or framing failure on an established channel.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A channel could not be opened or connected.
    #[error("failed to connect to {address}")]
    Connection {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The connection string is not one this connector understands.
    #[error("unsupported address: {address}")]
    BadAddress { address: String },

    /// The bootstrap handshake reply could not be decoded.
    #[error("bootstrap handshake failed")]
    Bootstrap(#[source] WireError),

    /// Operation attempted on a closed session.
    #[error("session is not connected")]
    NotConnected,
}

impl ClientError {
    /// True if the daemon itself reported the failure (an intact `FAIL`
    /// reply rather than a transport or decode fault).
    pub fn is_daemon_failure(&self) -> bool {
        match self {
            ClientError::Wire(e) | ClientError::Bootstrap(e) => e.is_command_failure(),
            _ => false,
        }
    }
}
