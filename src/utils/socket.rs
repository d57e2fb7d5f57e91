use std::{io, net::SocketAddr, time::Duration};

use socket2::{Domain, Protocol, Socket, TcpKeepalive, Type};
use tokio::net::TcpSocket;

/// Socket options applied to every outgoing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketOptions {
    pub nodelay: bool,
    pub keepalive: Option<Duration>,
}

impl Default for SocketOptions {
    fn default() -> Self {
        Self {
            nodelay: true,
            keepalive: Some(Duration::from_secs(60)),
        }
    }
}

/// Turn on TCP keepalive with the given idle time.
pub fn enable_keepalive(socket: &Socket, idle: Duration) -> io::Result<()> {
    socket.set_keepalive(true)?;
    socket.set_tcp_keepalive(&TcpKeepalive::new().with_time(idle))
}

/// Create a non-blocking TCP socket for `addr` and hand it over to tokio, still unconnected.
pub fn create_socket(addr: &SocketAddr, options: SocketOptions) -> io::Result<TcpSocket> {
    let socket = Socket::new(Domain::for_address(*addr), Type::STREAM, Some(Protocol::TCP))?;

    // Tokio requires the fd to be non-blocking before it is registered.
    socket.set_nonblocking(true)?;
    socket.set_nodelay(options.nodelay)?;
    if let Some(idle) = options.keepalive {
        enable_keepalive(&socket, idle)?;
    }

    Ok(TcpSocket::from_std_stream(socket.into()))
}
