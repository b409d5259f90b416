//! Service configuration.

use std::net::SocketAddr;

use crate::error::{Error, Result};
use crate::playback::PlaybackSpeed;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Where to listen and how fast to play by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisConfig {
    /// Listen address (`ALGOLAB_ADDR`)
    pub addr: SocketAddr,
    /// Initial speed of every player (`ALGOLAB_SPEED`)
    pub speed: PlaybackSpeed,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            speed: PlaybackSpeed::default(),
        }
    }
}

impl VisConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr: SocketAddr = lookup("ALGOLAB_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|e| Error::Config(format!("invalid ALGOLAB_ADDR: {}", e)))?;

        let speed = match lookup("ALGOLAB_SPEED") {
            Some(raw) => raw
                .parse::<PlaybackSpeed>()
                .map_err(|e| Error::Config(format!("invalid ALGOLAB_SPEED: {}", e)))?,
            None => PlaybackSpeed::default(),
        };

        Ok(Self { addr, speed })
    }

    /// Override the port, keeping the host.
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }
}
