// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel traits at the transport boundary.
//!
//! The protocol depends on exactly two transport semantics: one
//! send-then-receive exchange per command, and a stream of inbound
//! notification frames. Everything else (framing, socket type) lives
//! behind these traits.

use async_trait::async_trait;

use crate::ClientError;

/// Synchronous request/reply channel: one send, one blocking receive.
///
/// The protocol has no request identifiers, so there is no pipelining.
/// `&mut self` enforces the one-outstanding-command discipline at
/// compile time; concurrent callers must serialize on the session.
#[async_trait]
pub trait RequestChannel: Send {
    /// Send one command frame and block for its reply frame.
    async fn exchange(&mut self, frame: &str) -> Result<String, ClientError>;
}

/// Subscribe channel: daemon-pushed frames, independent of the request
/// path.
#[async_trait]
pub trait SubscribeChannel: Send {
    /// Receive the next notification frame.
    ///
    /// Blocks until a frame arrives; cancellation is the caller's
    /// responsibility (drop the session to unblock).
    async fn recv(&mut self) -> Result<String, ClientError>;
}

/// Opens channels from connection strings.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Open a request/reply channel to `address`.
    async fn request(&self, address: &str) -> Result<Box<dyn RequestChannel>, ClientError>;

    /// Open a subscribe channel to `address`.
    async fn subscribe(&self, address: &str) -> Result<Box<dyn SubscribeChannel>, ClientError>;
}
