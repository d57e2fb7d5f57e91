use super::super::Candidate;

#[test]
fn test_parse() {
    let c: Candidate = "example.com:80".parse().unwrap();
    assert_eq!(c, Candidate::new("example.com", 80));

    let c: Candidate = "127.0.0.1:8080".parse().unwrap();
    assert_eq!(c.host, "127.0.0.1");
    assert_eq!(c.port, 8080);

    // IPv6 literals are bracketed, the brackets are not part of the host.
    let c: Candidate = "[::1]:443".parse().unwrap();
    assert_eq!(c, Candidate::new("::1", 443));
}

#[test]
fn test_parse_invalid() {
    assert!("example.com".parse::<Candidate>().is_err());
    assert!(":80".parse::<Candidate>().is_err());
    assert!("example.com:http".parse::<Candidate>().is_err());
    assert!("example.com:70000".parse::<Candidate>().is_err());
    assert!("::1:80".parse::<Candidate>().is_err());
    assert!("[::1:80".parse::<Candidate>().is_err());
}

#[test]
fn test_display() {
    assert_eq!(Candidate::new("example.com", 80).to_string(), "example.com:80");
    assert_eq!(Candidate::new("::1", 443).to_string(), "[::1]:443");

    let c = Candidate::new("fe80::1", 22);
    assert_eq!(c.to_string().parse::<Candidate>().unwrap(), c);
}
