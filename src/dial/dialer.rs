use std::net::SocketAddr;

use tokio::net::{lookup_host, TcpStream};
use tracing::debug;

use crate::utils::{create_socket, ErrorKind, SocketOptions, PBF};

use super::Candidate;

pub type DialFuture<'a> = PBF<'a, Result<TcpStream, ErrorKind>>;

/// Resolves a candidate and opens a TCP connection to it.
///
/// Implementations do not need to enforce a deadline; the attempt driving them does.
pub trait Dialer: Send + Sync {
    fn dial<'a>(&'a self, candidate: &'a Candidate) -> DialFuture<'a>;
}

/// The production dialer: system resolver, socket2 socket setup, tokio connect.
pub struct TcpDialer {
    options: SocketOptions,
}

impl TcpDialer {
    pub fn new(options: SocketOptions) -> Self {
        Self { options }
    }

    async fn resolve(candidate: &Candidate) -> Result<SocketAddr, ErrorKind> {
        let mut addrs = lookup_host((candidate.host.as_str(), candidate.port))
            .await
            .map_err(|e| {
                debug!("[{}] Failed to resolve: {}", candidate, e);
                ErrorKind::Dns
            })?;

        // Address ordering is left to the resolver, the first answer is used.
        addrs.next().ok_or_else(|| {
            debug!("[{}] Resolved to no address", candidate);
            ErrorKind::Dns
        })
    }
}

impl Default for TcpDialer {
    fn default() -> Self {
        Self::new(SocketOptions::default())
    }
}

impl Dialer for TcpDialer {
    fn dial<'a>(&'a self, candidate: &'a Candidate) -> DialFuture<'a> {
        Box::pin(async move {
            let addr = Self::resolve(candidate).await?;

            let classify = |e: std::io::Error| {
                debug!("[{}] Failed to connect {}: {}", candidate, addr, e);
                ErrorKind::classify_io(&e)
            };

            let socket = create_socket(&addr, self.options).map_err(classify)?;
            socket.connect(addr).await.map_err(classify)
        })
    }
}
