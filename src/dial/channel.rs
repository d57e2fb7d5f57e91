use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    time::{timeout_at, Instant},
};

use super::AttemptOutcome;

/// What a bounded `take` produced.
#[derive(Debug)]
pub enum Taken {
    Outcome(AttemptOutcome),
    /// The deadline passed before anything arrived.
    TimedOut,
    /// Every publisher is gone and nothing is left to deliver.
    Closed,
}

/// The producer side, one clone per attempt.
#[derive(Clone)]
pub struct Publisher {
    sender: UnboundedSender<AttemptOutcome>,
}

impl Publisher {
    /// Hand an outcome over to the race. Never blocks.
    ///
    /// If the race is no longer listening the outcome is dropped right here, which closes any
    /// stream it carries.
    pub fn publish(&self, outcome: AttemptOutcome) {
        if let Err(rejected) = self.sender.send(outcome) {
            drop(rejected.0);
        }
    }
}

/// Completion-ordered handoff of attempt outcomes to a single consumer.
pub struct ResultChannel {
    receiver: UnboundedReceiver<AttemptOutcome>,
}

impl ResultChannel {
    pub fn new() -> (Publisher, ResultChannel) {
        let (sender, receiver) = unbounded_channel();
        (Publisher { sender }, ResultChannel { receiver })
    }

    /// Wait for the next outcome in arrival order, but not past `deadline`.
    pub async fn take(&mut self, deadline: Instant) -> Taken {
        match timeout_at(deadline, self.receiver.recv()).await {
            Ok(Some(outcome)) => Taken::Outcome(outcome),
            Ok(None) => Taken::Closed,
            Err(_) => Taken::TimedOut,
        }
    }

    /// Wait for the next outcome without a deadline; `None` once all publishers are gone.
    pub async fn take_unbounded(&mut self) -> Option<AttemptOutcome> {
        self.receiver.recv().await
    }
}
