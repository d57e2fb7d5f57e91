use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::utils::{DialStream, ErrorKind};

use super::{AttemptOutcome, Candidate, Dialer, ResultChannel, SingleAttempt, Taken};

/// The terminal value of a race.
#[derive(Debug)]
pub enum RaceResult {
    Winner(DialStream),
    /// Every candidate failed, reasons in completion order.
    AllFailed(Vec<(Candidate, ErrorKind)>),
    TimedOut,
}

impl RaceResult {
    /// Keep the winning stream, if any.
    pub fn into_stream(self) -> Option<DialStream> {
        match self {
            RaceResult::Winner(stream) => Some(stream),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_winner(&self) -> bool {
        matches!(self, RaceResult::Winner(_))
    }
}

/// Log every reason a race produced no connection.
pub(super) fn report_failures(failures: &[(Candidate, ErrorKind)]) {
    for (candidate, reason) in failures {
        warn!("[{}] Failed to connect: {}", candidate, reason);
    }
}

/// Consume whatever the remaining attempts publish, closing any connection that arrives late.
async fn drain_stragglers(mut channel: ResultChannel) {
    while let Some(outcome) = channel.take_unbounded().await {
        match outcome {
            AttemptOutcome::Success { stream, candidate } => {
                debug!("[{}] Closing late connection to {}", candidate, stream.peer_addr);
                if let Err(e) = stream.close().await {
                    debug!("[{}] Error while closing late connection: {}", candidate, e);
                }
            }
            AttemptOutcome::Failure { candidate, reason } => {
                debug!("[{}] Discarding late failure: {}", candidate, reason);
            }
        }
    }
}

/// Races one attempt per candidate and keeps the first connection that completes.
pub struct ConnectionRace {
    dialer: Arc<dyn Dialer>,
    deadline: Instant,
}

impl ConnectionRace {
    pub fn new(dialer: Arc<dyn Dialer>, deadline: Instant) -> Self {
        Self { dialer, deadline }
    }

    pub async fn run(self, candidates: &[Candidate]) -> RaceResult {
        let (publisher, mut channel) = ResultChannel::new();

        // Start all attempts at once, they share the deadline and the channel.
        for candidate in candidates {
            SingleAttempt::new(candidate.clone(), self.deadline)
                .spawn(self.dialer.clone(), publisher.clone());
        }

        // Only the attempts hold publishers now, so the channel closes once all of them reported.
        drop(publisher);

        let mut failures = Vec::with_capacity(candidates.len());
        loop {
            match channel.take(self.deadline).await {
                Taken::Outcome(AttemptOutcome::Success { stream, candidate }) => {
                    info!("[{}] Won the race via {}", candidate, stream.peer_addr);

                    // Do not wait for the others, a background task disposes of their outcomes.
                    if failures.len() + 1 < candidates.len() {
                        tokio::spawn(drain_stragglers(channel));
                    }
                    return RaceResult::Winner(stream);
                }

                Taken::Outcome(AttemptOutcome::Failure { candidate, reason }) => {
                    failures.push((candidate, reason));
                    if failures.len() == candidates.len() {
                        report_failures(&failures);

                        // The last attempt only gave up because the deadline passed.
                        if Instant::now() >= self.deadline {
                            return RaceResult::TimedOut;
                        }
                        return RaceResult::AllFailed(failures);
                    }
                }

                // An attempt task went away without reporting (it panicked), nothing more can arrive.
                Taken::Closed => {
                    report_failures(&failures);
                    return RaceResult::AllFailed(failures);
                }

                Taken::TimedOut => {
                    report_failures(&failures);
                    warn!(
                        "Timed out with {} of {} candidates still pending",
                        candidates.len() - failures.len(),
                        candidates.len()
                    );
                    tokio::spawn(drain_stragglers(channel));
                    return RaceResult::TimedOut;
                }
            }
        }
    }
}
