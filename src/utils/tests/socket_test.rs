use std::time::Duration;

use socket2::SockRef;

use crate::dial::tests::Endpoint;

use super::super::{create_socket, SocketOptions};

#[tokio::test]
async fn test_socket_options_applied() {
    let endpoint = Endpoint::start().await;

    let options = SocketOptions {
        nodelay: true,
        keepalive: Some(Duration::from_secs(30)),
    };
    let stream = create_socket(&endpoint.addr, options)
        .unwrap()
        .connect(endpoint.addr)
        .await
        .unwrap();

    let sock = SockRef::from(&stream);
    assert!(sock.nodelay().unwrap());
    assert!(sock.keepalive().unwrap());
    assert_eq!(sock.keepalive_time().unwrap(), Duration::from_secs(30));
}

#[tokio::test]
async fn test_keepalive_disabled() {
    let endpoint = Endpoint::start().await;

    let options = SocketOptions {
        nodelay: false,
        keepalive: None,
    };
    let stream = create_socket(&endpoint.addr, options)
        .unwrap()
        .connect(endpoint.addr)
        .await
        .unwrap();

    let sock = SockRef::from(&stream);
    assert!(!sock.nodelay().unwrap());
    assert!(!sock.keepalive().unwrap());
}
