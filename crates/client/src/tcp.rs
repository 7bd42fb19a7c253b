// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TCP channel implementation: length-prefixed frames over `TcpStream`.

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::debug;

use playd_wire::{read_message, write_message};

use crate::channel::{Connector, RequestChannel, SubscribeChannel};
use crate::ClientError;

/// Connector for `tcp://host:port` addresses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl TcpConnector {
    pub fn new() -> Self {
        Self
    }

    async fn open(&self, address: &str) -> Result<FramedChannel, ClientError> {
        let host_port = address
            .strip_prefix("tcp://")
            .ok_or_else(|| ClientError::BadAddress { address: address.to_string() })?;

        debug!(address, "connecting");
        let stream = TcpStream::connect(host_port)
            .await
            .map_err(|source| ClientError::Connection {
                address: address.to_string(),
                source,
            })?;

        Ok(FramedChannel { stream })
    }
}

#[async_trait]
impl Connector for TcpConnector {
    async fn request(&self, address: &str) -> Result<Box<dyn RequestChannel>, ClientError> {
        Ok(Box::new(self.open(address).await?))
    }

    async fn subscribe(&self, address: &str) -> Result<Box<dyn SubscribeChannel>, ClientError> {
        Ok(Box::new(self.open(address).await?))
    }
}

/// One framed text channel over a TCP stream.
struct FramedChannel {
    stream: TcpStream,
}

impl FramedChannel {
    async fn send(&mut self, frame: &str) -> Result<(), ClientError> {
        write_message(&mut self.stream, frame.as_bytes())
            .await
            .map_err(ClientError::from)
    }

    async fn recv_frame(&mut self) -> Result<String, ClientError> {
        let data = read_message(&mut self.stream).await?;
        let frame = String::from_utf8(data).map_err(playd_wire::WireError::from)?;
        debug!(len = frame.len(), "received frame");
        Ok(frame)
    }
}

#[async_trait]
impl RequestChannel for FramedChannel {
    async fn exchange(&mut self, frame: &str) -> Result<String, ClientError> {
        self.send(frame).await?;
        self.recv_frame().await
    }
}

#[async_trait]
impl SubscribeChannel for FramedChannel {
    async fn recv(&mut self) -> Result<String, ClientError> {
        self.recv_frame().await
    }
}

#[cfg(test)]
#[path = "tcp_tests.rs"]
mod tests;
