// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the playd media-playback daemon.
//!
//! A [`Session`] owns two channels: a synchronous request/reply channel
//! for commands and a subscribe channel for daemon-pushed notifications.
//! The subscribe address is not configured — it is learned from the
//! daemon itself during the bootstrap handshake (`PUBSUB`).

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod channel;
mod error;
mod session;
mod tcp;

pub use channel::{Connector, RequestChannel, SubscribeChannel};
pub use error::ClientError;
pub use session::{Session, PING_TOKEN};
pub use tcp::TcpConnector;
