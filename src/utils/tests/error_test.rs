use std::io;

use super::super::{ConnectError, ErrorKind, QuickResult};

fn kind_of(kind: io::ErrorKind) -> ErrorKind {
    ErrorKind::classify_io(&io::Error::from(kind))
}

#[test]
fn test_classify_io() {
    assert_eq!(kind_of(io::ErrorKind::ConnectionRefused), ErrorKind::ConnectionRefused);
    assert_eq!(kind_of(io::ErrorKind::ConnectionReset), ErrorKind::Reset);
    assert_eq!(kind_of(io::ErrorKind::ConnectionAborted), ErrorKind::Reset);
    assert_eq!(kind_of(io::ErrorKind::TimedOut), ErrorKind::Timeout);
    assert_eq!(kind_of(io::ErrorKind::HostUnreachable), ErrorKind::Unreachable);
    assert_eq!(kind_of(io::ErrorKind::NetworkUnreachable), ErrorKind::Unreachable);
    assert_eq!(kind_of(io::ErrorKind::AddrNotAvailable), ErrorKind::Unreachable);
}

#[test]
fn test_messages() {
    assert_eq!(ErrorKind::Dns.to_string(), "address resolution failed");
    assert_eq!(
        ConnectError::InvalidArgument("no candidates".into()).to_string(),
        "invalid argument: no candidates"
    );

    // The binary escalates an empty result through the boxed error alias.
    let result: QuickResult<()> = Err(ConnectError::NoConnection.into());
    assert_eq!(result.unwrap_err().to_string(), "no candidate could be connected");
}

#[test]
fn test_serialize_kind() {
    assert_eq!(
        serde_json::to_string(&ErrorKind::ConnectionRefused).unwrap(),
        "\"connection_refused\""
    );
}
