// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command frames sent from client to daemon.

use std::fmt;

/// A command frame: an uppercase verb plus optional argument.
///
/// The daemon dispatches on the verb prefix, so bare-verb commands still
/// carry a trailing space for wire compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask for the daemon's publish address (bootstrap handshake).
    PubSub,

    /// Liveness check; the daemon echoes the token back.
    Ping { token: String },

    /// Query media tags for a URI.
    Tags { uri: String },

    /// Add a source to the playback pipeline.
    Play { uri: String },

    /// Remove a playing source by its player id.
    Stop { id: u64 },

    /// Dump the pipeline graph for diagnostics.
    DumpGraph { path: String },

    /// Ask the daemon to shut down.
    Quit,
}

impl Command {
    /// Encode this command as one wire frame.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PubSub => write!(f, "PUBSUB "),
            Command::Ping { token } => write!(f, "PING {token}"),
            Command::Tags { uri } => write!(f, "TAGS {uri}"),
            Command::Play { uri } => write!(f, "PLAY {uri}"),
            Command::Stop { id } => write!(f, "STOP {id}"),
            Command::DumpGraph { path } => write!(f, "DUMPGRAPH {path}"),
            Command::Quit => write!(f, "QUIT "),
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
