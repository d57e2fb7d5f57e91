use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::utils::{QuickResult, SocketOptions};

/// Tunables shared by every call of a [`Connector`](super::Connector).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Used whenever a caller passes a zero timeout.
    pub default_timeout_ms: u64,
    pub nodelay: bool,
    /// TCP keepalive idle time, `None` disables keepalive.
    pub keepalive_secs: Option<u64>,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: 10_000,
            nodelay: true,
            keepalive_secs: Some(60),
        }
    }
}

impl DialConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> QuickResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Resolve a caller supplied timeout, zero meaning "use the default".
    pub fn effective_timeout(&self, timeout: Duration) -> Duration {
        if timeout.is_zero() {
            Duration::from_millis(self.default_timeout_ms)
        } else {
            timeout
        }
    }

    pub fn socket_options(&self) -> SocketOptions {
        SocketOptions {
            nodelay: self.nodelay,
            keepalive: self.keepalive_secs.map(Duration::from_secs),
        }
    }
}
