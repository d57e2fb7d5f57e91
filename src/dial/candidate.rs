use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::utils::ConnectError;

/// One server endpoint eligible for a race.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub host: String,
    pub port: u16,
}

impl Candidate {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // IPv6 literals need brackets to keep the port separator unambiguous.
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for Candidate {
    type Err = ConnectError;

    /// Parse `host:port` or `[v6-address]:port`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ConnectError::InvalidArgument(format!("expected host:port, got '{}'", raw));

        // The port follows the last colon, IPv6 literals are bracketed.
        let (host, port) = raw.rsplit_once(':').ok_or_else(invalid)?;
        let host = match host.strip_prefix('[') {
            Some(inner) => inner.strip_suffix(']').ok_or_else(invalid)?,
            None if host.contains(':') => return Err(invalid()),
            None => host,
        };
        if host.is_empty() {
            return Err(invalid());
        }

        let port = port.parse::<u16>().map_err(|_| invalid())?;
        Ok(Candidate::new(host, port))
    }
}

impl From<(&str, u16)> for Candidate {
    fn from((host, port): (&str, u16)) -> Self {
        Candidate::new(host, port)
    }
}
