use std::{sync::Arc, time::Duration};

use tokio::time::Instant;
use tracing::warn;

use crate::utils::{ConnectError, DialStream};

use super::{
    race::report_failures, AttemptOutcome, Candidate, ConnectionRace, DialConfig, Dialer,
    RaceResult, SingleAttempt, TcpDialer,
};

/// The instant `timeout` from now, clamped to a far future instead of overflowing.
fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout)
        .unwrap_or_else(|| now + Duration::from_secs(86400 * 365 * 30))
}

/// Entry point for establishing connections, single or raced.
///
/// Calls are independent of each other: nothing is cached between them.
pub struct Connector {
    config: DialConfig,
    dialer: Arc<dyn Dialer>,
}

impl Connector {
    pub fn new(config: DialConfig) -> Self {
        let dialer = Arc::new(TcpDialer::new(config.socket_options()));
        Self { config, dialer }
    }

    /// Use a custom dialer instead of the TCP one.
    pub fn with_dialer(config: DialConfig, dialer: Arc<dyn Dialer>) -> Self {
        Self { config, dialer }
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    fn deadline(&self, timeout: Duration) -> Instant {
        deadline_after(self.config.effective_timeout(timeout))
    }

    /// Connect to a single endpoint. A zero `timeout` uses the configured default.
    pub async fn connect(&self, host: &str, port: u16, timeout: Duration) -> Option<DialStream> {
        self.attempt_one(Candidate::new(host, port), timeout)
            .await
            .into_stream()
    }

    /// Connect to whichever candidate answers first.
    ///
    /// `Ok(None)` means nothing connected in time; the reasons are logged.
    pub async fn connect_parallel(
        &self,
        candidates: &[Candidate],
        timeout: Duration,
    ) -> Result<Option<DialStream>, ConnectError> {
        Ok(self.race(candidates, timeout).await?.into_stream())
    }

    /// Like [`connect_parallel`](Self::connect_parallel), but returns the detailed result.
    pub async fn race(
        &self,
        candidates: &[Candidate],
        timeout: Duration,
    ) -> Result<RaceResult, ConnectError> {
        match candidates {
            [] => Err(ConnectError::InvalidArgument(
                "no candidates to connect to".into(),
            )),

            // A race of one is exactly a single connect.
            [only] => Ok(self.attempt_one(only.clone(), timeout).await),

            _ => {
                let race = ConnectionRace::new(self.dialer.clone(), self.deadline(timeout));
                Ok(race.run(candidates).await)
            }
        }
    }

    async fn attempt_one(&self, candidate: Candidate, timeout: Duration) -> RaceResult {
        let deadline = self.deadline(timeout);
        let attempt = SingleAttempt::new(candidate, deadline);
        match attempt.run(self.dialer.as_ref()).await {
            AttemptOutcome::Success { stream, .. } => RaceResult::Winner(stream),

            // Only the shared deadline makes a timeout, an OS connect timeout before it is a failure.
            AttemptOutcome::Failure { candidate, .. } if Instant::now() >= deadline => {
                warn!("[{}] Timed out", candidate);
                RaceResult::TimedOut
            }
            AttemptOutcome::Failure { candidate, reason } => {
                let failures = vec![(candidate, reason)];
                report_failures(&failures);
                RaceResult::AllFailed(failures)
            }
        }
    }
}

impl Default for Connector {
    fn default() -> Self {
        Self::new(DialConfig::default())
    }
}
