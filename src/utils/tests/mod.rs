mod error_test;
mod socket_test;
