//! Configuration types for the auth library

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::timing;

/// Verification countdown configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Seconds a dispatched code stays valid
    #[serde(default = "default_code_ttl")]
    pub code_ttl_secs: u32,
    /// Countdown tick period in milliseconds
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

fn default_code_ttl() -> u32 {
    timing::CODE_TTL_SECS
}

fn default_tick_interval() -> u64 {
    timing::TICK_INTERVAL_MS
}

impl VerificationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_secs: default_code_ttl(),
            tick_interval_ms: default_tick_interval(),
        }
    }
}

/// Auth collaborator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthClientConfig {
    /// Base URL of the auth server. `None` selects the simulated collaborator.
    #[serde(default)]
    pub base_url: Option<String>,
    /// HTTP request timeout in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
    /// Delay the simulated collaborator waits per call, in milliseconds
    #[serde(default = "default_simulated_latency")]
    pub simulated_latency_ms: u64,
}

fn default_request_timeout() -> u64 {
    timing::REQUEST_TIMEOUT_MS
}

fn default_simulated_latency() -> u64 {
    timing::SIMULATED_LATENCY_MS
}

impl AuthClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Default for AuthClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout_ms: default_request_timeout(),
            simulated_latency_ms: default_simulated_latency(),
        }
    }
}
