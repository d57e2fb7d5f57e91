//! Race TCP connections to several candidate endpoints and keep the first one that connects.
//!
//! ```no_run
//! # async fn demo() -> Result<(), quickdial::utils::ConnectError> {
//! use std::time::Duration;
//! use quickdial::dial::{Candidate, Connector};
//!
//! let connector = Connector::default();
//! let candidates = ["10.0.0.1:80".parse::<Candidate>()?, Candidate::new("example.com", 80)];
//! if let Some(stream) = connector
//!     .connect_parallel(&candidates, Duration::from_secs(2))
//!     .await?
//! {
//!     stream.send(b"ping").await.ok();
//! }
//! # Ok(())
//! # }
//! ```

pub mod dial;
pub mod utils;
