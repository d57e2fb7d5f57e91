
mod attempt_test;
mod candidate_test;

pub use fixtures::*;
