use std::{future::Future, pin::Pin};

mod error;
mod socket;
mod stream;

#[cfg(test)]
mod tests;

pub use error::*;
pub use socket::*;
pub use stream::*;

/// PBF = Pin Box Future
pub type PBF<'a, O> = Pin<Box<dyn Future<Output = O> + Send + 'a>>;

pub type QuickResult<T> = Result<T, BoxedError>;
