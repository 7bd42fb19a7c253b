// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TCP channel tests against a local listener.

use tokio::net::TcpListener;

use playd_wire::{read_message, write_message};

use super::TcpConnector;
use crate::channel::Connector;
use crate::ClientError;

#[tokio::test]
async fn rejects_unknown_address_scheme() {
    let connector = TcpConnector::new();

    match connector.request("ipc:///tmp/playd").await {
        Err(ClientError::BadAddress { address }) => assert_eq!(address, "ipc:///tmp/playd"),
        _ => panic!("expected BadAddress"),
    }
}

#[tokio::test]
async fn connect_failure_surfaces_as_connection_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("tcp://{}", listener.local_addr().unwrap());
    drop(listener);

    assert!(matches!(
        TcpConnector::new().request(&address).await,
        Err(ClientError::Connection { .. })
    ));
}

#[tokio::test]
async fn exchange_roundtrips_one_frame() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("tcp://{}", listener.local_addr().unwrap());

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let frame = read_message(&mut stream).await.unwrap();
        assert_eq!(frame, b"PING GstPlayDaemon");
        write_message(&mut stream, b"OK Message was GstPlayDaemon")
            .await
            .unwrap();
    });

    let mut channel = TcpConnector::new().request(&address).await.unwrap();
    let reply = channel.exchange("PING GstPlayDaemon").await.unwrap();

    assert_eq!(reply, "OK Message was GstPlayDaemon");
    server.await.unwrap();
}
