mod connect;
mod probe;

pub use connect::*;
pub use probe::*;
