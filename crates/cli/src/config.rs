use std::{env, time::Duration};

use kanbancal_core::gesture::{EdgeConfig, SwipeConfig};
use kanbancal_core::session::SessionConfig;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Minimum horizontal swipe travel (default: 50)
    pub swipe_threshold: f64,
    /// Distance from a viewport edge that turns the day during a drag (default: 100)
    pub edge_threshold: f64,
    /// Minimum milliseconds between edge-triggered day changes (default: 1000)
    pub edge_cooldown_ms: u64,
    /// Whether new stores start with the demo fixture (default: true)
    pub seed_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `KANBANCAL_SWIPE_THRESHOLD` - Swipe threshold (default: 50)
    /// - `KANBANCAL_EDGE_THRESHOLD` - Edge threshold (default: 100)
    /// - `KANBANCAL_EDGE_COOLDOWN_MS` - Edge cooldown in ms (default: 1000)
    /// - `KANBANCAL_SEED_DATA` - Preload the demo fixture (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            swipe_threshold: lookup("KANBANCAL_SWIPE_THRESHOLD")
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v >= 0.0)
                .unwrap_or(50.0),
            edge_threshold: lookup("KANBANCAL_EDGE_THRESHOLD")
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v >= 0.0)
                .unwrap_or(100.0),
            edge_cooldown_ms: lookup("KANBANCAL_EDGE_COOLDOWN_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            seed_data: lookup("KANBANCAL_SEED_DATA")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        }
    }

    pub fn swipe(&self) -> SwipeConfig {
        SwipeConfig {
            threshold: self.swipe_threshold,
        }
    }

    pub fn edge(&self) -> EdgeConfig {
        EdgeConfig {
            threshold: self.edge_threshold,
            cooldown: Duration::from_millis(self.edge_cooldown_ms),
        }
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            swipe: self.swipe(),
            edge: self.edge(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
