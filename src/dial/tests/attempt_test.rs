use std::{sync::Arc, time::Duration};

use tokio::time::Instant;

use crate::utils::ErrorKind;

use super::{
    super::{AttemptOutcome, Candidate, ResultChannel, SingleAttempt, Taken, TcpDialer},
    refused_addr, Endpoint, ScriptedDialer,
};

fn deadline_in(ms: u64) -> Instant {
    Instant::now() + Duration::from_millis(ms)
}

#[tokio::test]
async fn test_connects() {
    let mut endpoint = Endpoint::start().await;
    let candidate = Candidate::new("127.0.0.1", endpoint.addr.port());

    let outcome = SingleAttempt::new(candidate.clone(), deadline_in(5000))
        .run(&TcpDialer::default())
        .await;

    match outcome {
        AttemptOutcome::Success { stream, candidate: c } => {
            assert_eq!(c, candidate);
            assert_eq!(stream.candidate, candidate);
            assert_eq!(stream.peer_addr, endpoint.addr);
        }
        other => panic!("expected a success, got {:?}", other),
    }

    // The stream was dropped at the end of the match arm, which closes it.
    assert!(endpoint.wait_closed(Duration::from_secs(3)).await);
}

#[tokio::test]
async fn test_refused() {
    let addr = refused_addr().await;
    let candidate = Candidate::new("127.0.0.1", addr.port());

    let outcome = SingleAttempt::new(candidate, deadline_in(5000))
        .run(&TcpDialer::default())
        .await;

    assert!(matches!(
        outcome,
        AttemptOutcome::Failure {
            reason: ErrorKind::ConnectionRefused,
            ..
        }
    ));
}

#[tokio::test]
async fn test_bounded_by_deadline() {
    let dialer = ScriptedDialer::new().hang("slow");

    let started = Instant::now();
    let outcome = SingleAttempt::new(Candidate::new("slow", 80), deadline_in(150))
        .run(&dialer)
        .await;

    assert!(matches!(
        outcome,
        AttemptOutcome::Failure {
            reason: ErrorKind::Timeout,
            ..
        }
    ));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_scripted_failure_is_kept() {
    let dialer = ScriptedDialer::new().fail("reset", 10, ErrorKind::Reset);

    let outcome = SingleAttempt::new(Candidate::new("reset", 80), deadline_in(5000))
        .run(&dialer)
        .await;
    assert!(matches!(
        outcome,
        AttemptOutcome::Failure {
            reason: ErrorKind::Reset,
            ..
        }
    ));

    // A host the dialer cannot resolve.
    let outcome = SingleAttempt::new(Candidate::new("nowhere", 80), deadline_in(5000))
        .run(&dialer)
        .await;
    assert!(matches!(
        outcome,
        AttemptOutcome::Failure {
            reason: ErrorKind::Dns,
            ..
        }
    ));
}

#[tokio::test]
async fn test_spawn_publishes_once() {
    let endpoint = Endpoint::start().await;
    let dialer = Arc::new(ScriptedDialer::new().succeed("ok", 10, endpoint.addr));
    let (publisher, mut channel) = ResultChannel::new();

    SingleAttempt::new(Candidate::new("ok", 80), deadline_in(5000)).spawn(dialer, publisher);

    let deadline = deadline_in(5000);
    assert!(matches!(
        channel.take(deadline).await,
        Taken::Outcome(AttemptOutcome::Success { .. })
    ));
    // The attempt dropped its publisher after its single outcome.
    assert!(matches!(channel.take(deadline).await, Taken::Closed));
}
