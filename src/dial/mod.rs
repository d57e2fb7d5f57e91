mod attempt;
mod candidate;
mod channel;
mod config;
mod connector;
mod dialer;
mod race;

#[cfg(test)]
pub(crate) mod tests;

pub use attempt::*;
pub use candidate::*;
pub use channel::*;
pub use config::*;
pub use connector::*;
pub use dialer::*;
pub use race::{ConnectionRace, RaceResult};
