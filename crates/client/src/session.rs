// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session: bootstrap handshake and client operations.

use tracing::{debug, info};

use playd_wire::{decode, decode_tags, Command, TagDict};

use crate::channel::{Connector, RequestChannel, SubscribeChannel};
use crate::ClientError;

/// Client-identifying token echoed by the daemon on `PING`.
pub const PING_TOKEN: &str = "GstPlayDaemon";

/// A bootstrapped session with the playd daemon.
///
/// Owns exactly one request/reply channel and one subscribe channel,
/// created together by [`Session::bootstrap`] and released together by
/// [`Session::close`] (or on drop). A `Session` that exists is ready:
/// the unconnected and mid-bootstrap states are not representable —
/// any bootstrap failure releases whatever was opened and returns an
/// error instead of a session. After `close`, every operation fails
/// with [`ClientError::NotConnected`].
pub struct Session {
    request: Option<Box<dyn RequestChannel>>,
    subscribe: Option<Box<dyn SubscribeChannel>>,
}

impl Session {
    /// Bootstrap a session against the daemon at `address`.
    ///
    /// Opens the request channel, asks the daemon for its publish
    /// address (`PUBSUB`), then connects the subscribe channel to the
    /// address named in the reply. A reply that fails to decode
    /// surfaces as [`ClientError::Bootstrap`]; channel open failures
    /// surface as [`ClientError::Connection`].
    pub async fn bootstrap(
        connector: &dyn Connector,
        address: &str,
    ) -> Result<Session, ClientError> {
        info!(address, "bootstrapping session");
        let mut request = connector.request(address).await?;

        let reply = request.exchange(&Command::PubSub.encode()).await?;
        let publish = decode(&reply).map_err(ClientError::Bootstrap)?;

        info!(publish, "connecting subscribe channel");
        let subscribe = connector.subscribe(publish).await?;

        Ok(Session {
            request: Some(request),
            subscribe: Some(subscribe),
        })
    }

    /// Bootstrap over TCP. Convenience for the common case.
    pub async fn connect(address: &str) -> Result<Session, ClientError> {
        Session::bootstrap(&crate::TcpConnector::new(), address).await
    }

    /// Liveness check.
    ///
    /// Sends `PING <token>` and reports whether the raw reply text ends
    /// with the token. The daemon echoes the token at the end of its
    /// status line; deliberately, no status decode happens here — a
    /// failure reply whose text happens to end with the token still
    /// reads as alive. Matches the daemon's historical client contract.
    pub async fn ping(&mut self) -> Result<bool, ClientError> {
        let frame = Command::Ping { token: PING_TOKEN.to_string() }.encode();
        let reply = self.request()?.exchange(&frame).await?;

        Ok(reply.ends_with(PING_TOKEN))
    }

    /// Query media tags for a URI.
    pub async fn tags(&mut self, uri: &str) -> Result<TagDict, ClientError> {
        let frame = Command::Tags { uri: uri.to_string() }.encode();
        let reply = self.request()?.exchange(&frame).await?;

        Ok(decode_tags(&reply)?)
    }

    /// Add a source to the daemon's playback pipeline.
    ///
    /// Returns the daemon's reply text (`player id: <n>`).
    pub async fn play(&mut self, uri: &str) -> Result<String, ClientError> {
        self.command(Command::Play { uri: uri.to_string() }).await
    }

    /// Remove a playing source by its player id.
    pub async fn stop(&mut self, id: u64) -> Result<String, ClientError> {
        self.command(Command::Stop { id }).await
    }

    /// Ask the daemon to dump its pipeline graph for diagnostics.
    pub async fn dump_graph(&mut self, path: &str) -> Result<(), ClientError> {
        self.command(Command::DumpGraph { path: path.to_string() }).await?;
        Ok(())
    }

    /// Ask the daemon to shut down.
    pub async fn quit(&mut self) -> Result<(), ClientError> {
        self.command(Command::Quit).await?;
        Ok(())
    }

    /// Receive the next daemon-pushed notification frame, verbatim.
    ///
    /// Notifications share the reply grammar; callers wanting structure
    /// apply [`playd_wire::decode`] themselves.
    pub async fn notification(&mut self) -> Result<String, ClientError> {
        self.subscribe
            .as_deref_mut()
            .ok_or(ClientError::NotConnected)?
            .recv()
            .await
    }

    /// Release both channels: subscribe first, then request.
    ///
    /// Closing an already-closed session fails with
    /// [`ClientError::NotConnected`].
    pub fn close(&mut self) -> Result<(), ClientError> {
        if self.request.is_none() {
            return Err(ClientError::NotConnected);
        }

        debug!("closing session");
        drop(self.subscribe.take());
        drop(self.request.take());
        Ok(())
    }

    /// Send one command, decode the reply, return the remainder.
    async fn command(&mut self, command: Command) -> Result<String, ClientError> {
        let frame = command.encode();
        debug!(frame = %frame, "sending command");
        let reply = self.request()?.exchange(&frame).await?;

        Ok(decode(&reply)?.to_string())
    }

    fn request(&mut self) -> Result<&mut (dyn RequestChannel + 'static), ClientError> {
        self.request.as_deref_mut().ok_or(ClientError::NotConnected)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
