//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::feedback::DEFAULT_TIMEOUT_MS;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,
}

/// Where the persisted session record lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_file")]
    pub file: PathBuf,
}

fn default_session_file() -> PathBuf {
    PathBuf::from("./session.json")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

/// Feedback message lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_feedback_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_feedback_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_feedback_timeout_ms(),
        }
    }
}

impl FeedbackConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
