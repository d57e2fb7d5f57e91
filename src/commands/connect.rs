use std::{net::SocketAddr, time::Duration};

use quickdial::{
    dial::{Candidate, Connector},
    utils::{ConnectError, QuickResult},
};
use serde::Serialize;
use tokio::io;
use tracing::info;

#[derive(Serialize)]
struct WinnerReport<'a> {
    candidate: &'a Candidate,
    peer_addr: SocketAddr,
    local_addr: SocketAddr,
}

/// Race the candidates, report the winner, and optionally pipe stdin/stdout through it.
pub async fn connect_command(
    connector: Connector,
    candidates: Vec<Candidate>,
    timeout: Duration,
    pipe: bool,
    json: bool,
) -> QuickResult<()> {
    let stream = match connector.connect_parallel(&candidates, timeout).await? {
        Some(v) => v,
        None => return Err(ConnectError::NoConnection.into()),
    };

    info!(
        "[{}] Connected {} -> {}",
        stream.candidate, stream.local_addr, stream.peer_addr
    );

    // With --pipe, stdout carries the payload, so the summary only goes to the log.
    if !pipe {
        if json {
            let report = WinnerReport {
                candidate: &stream.candidate,
                peer_addr: stream.peer_addr,
                local_addr: stream.local_addr,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{} {}", stream.candidate, stream.peer_addr);
        }
    } else {
        stream.weld(io::stdin(), io::stdout()).await?;
    }

    stream.close().await?;
    Ok(())
}
