use std::{fmt::Debug, sync::Arc};

use tokio::time::{timeout_at, Instant};
use tracing::debug;

use crate::utils::{DialStream, ErrorKind};

use super::{Candidate, Dialer, Publisher};

/// The single result every attempt produces.
pub enum AttemptOutcome {
    Success {
        stream: DialStream,
        candidate: Candidate,
    },
    Failure {
        candidate: Candidate,
        reason: ErrorKind,
    },
}

impl AttemptOutcome {
    #[cfg(test)]
    pub fn candidate(&self) -> &Candidate {
        match self {
            AttemptOutcome::Success { candidate, .. } => candidate,
            AttemptOutcome::Failure { candidate, .. } => candidate,
        }
    }
}

impl Debug for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptOutcome::Success { stream, candidate } => f
                .debug_struct("Success")
                .field("candidate", candidate)
                .field("peer_addr", &stream.peer_addr)
                .finish(),
            AttemptOutcome::Failure { candidate, reason } => f
                .debug_struct("Failure")
                .field("candidate", candidate)
                .field("reason", reason)
                .finish(),
        }
    }
}

/// One bounded-time connection attempt to one candidate.
pub struct SingleAttempt {
    candidate: Candidate,
    deadline: Instant,
}

impl SingleAttempt {
    pub fn new(candidate: Candidate, deadline: Instant) -> Self {
        Self {
            candidate,
            deadline,
        }
    }

    /// Dial the candidate and return the outcome. Never outlives the deadline.
    pub async fn run(self, dialer: &dyn Dialer) -> AttemptOutcome {
        let Self {
            candidate,
            deadline,
        } = self;
        debug!("[{}] Connecting", candidate);

        let connected = match timeout_at(deadline, dialer.dial(&candidate)).await {
            Ok(v) => v,
            // The dial future is dropped here, which releases a half-open socket.
            Err(_) => Err(ErrorKind::Timeout),
        };

        // Wrapping can only fail if the peer vanished between connect and the address query.
        let wrapped = connected.and_then(|tcp| {
            DialStream::new(tcp, candidate.clone()).map_err(|e| ErrorKind::classify_io(&e))
        });

        match wrapped {
            Ok(stream) => {
                debug!("[{}] Connected to {}", candidate, stream.peer_addr);
                AttemptOutcome::Success { stream, candidate }
            }
            Err(reason) => {
                debug!("[{}] Failed: {}", candidate, reason);
                AttemptOutcome::Failure { candidate, reason }
            }
        }
    }

    /// Run on its own task and publish exactly one outcome, whether or not anyone still listens.
    pub fn spawn(self, dialer: Arc<dyn Dialer>, publisher: Publisher) {
        tokio::spawn(async move {
            let outcome = self.run(dialer.as_ref()).await;
            publisher.publish(outcome);
        });
    }
}
