use std::{net::SocketAddr, sync::Arc, time::Duration};

use quickdial::{
    dial::{Candidate, Connector, RaceResult},
    utils::{ErrorKind, QuickResult},
};
use serde::Serialize;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub candidate: Candidate,
    pub peer_addr: Option<SocketAddr>,
    pub error: Option<ErrorKind>,
    pub elapsed_ms: u128,
}

async fn probe_one(
    connector: &Connector,
    candidate: Candidate,
    timeout: Duration,
) -> QuickResult<ProbeReport> {
    let started = Instant::now();

    // A single-candidate race is a plain connect that keeps its failure reason.
    let result = connector
        .race(std::slice::from_ref(&candidate), timeout)
        .await?;
    let elapsed_ms = started.elapsed().as_millis();

    let (peer_addr, error) = match result {
        RaceResult::Winner(stream) => {
            let addr = stream.peer_addr;
            // Probing only proves reachability, the connection itself is not needed.
            if let Err(e) = stream.close().await {
                debug!("[{}] Error while closing probe connection: {}", candidate, e);
            }
            (Some(addr), None)
        }
        RaceResult::AllFailed(failures) => (None, failures.first().map(|(_, r)| *r)),
        RaceResult::TimedOut => (None, Some(ErrorKind::Timeout)),
    };

    Ok(ProbeReport {
        candidate,
        peer_addr,
        error,
        elapsed_ms,
    })
}

/// Connect to every candidate on its own, concurrently, and print one JSON line per candidate.
pub async fn probe_command(
    connector: Connector,
    candidates: Vec<Candidate>,
    timeout: Duration,
) -> QuickResult<()> {
    let connector = Arc::new(connector);

    let handles = candidates
        .into_iter()
        .map(|candidate| {
            let connector = connector.clone();
            tokio::spawn(async move { probe_one(&connector, candidate, timeout).await })
        })
        .collect::<Vec<_>>();

    // Await in submission order so the output lines follow the command line.
    for handle in handles {
        let report = handle.await??;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
