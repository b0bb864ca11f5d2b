//! Transient user-facing feedback channel

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long a posted message stays visible
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

struct Inner {
    message: Option<String>,
    /// Bumped on every post; a pending expiry only clears the slot if its
    /// generation is still current, so a newer post cancels older timers.
    generation: u64,
}

/// Single-slot, last-write-wins feedback channel with timed auto-clear.
///
/// Not a queue: posting while a message is pending replaces it, and the
/// replacement gets its own full expiry window.
#[derive(Clone)]
pub struct FeedbackNotifier {
    inner: Arc<Mutex<Inner>>,
    timeout: Duration,
}

impl FeedbackNotifier {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                message: None,
                generation: 0,
            })),
            timeout,
        }
    }

    /// Set the active message and arm a fresh single-shot expiry.
    ///
    /// Must be called from within a tokio runtime.
    pub fn post(&self, text: impl Into<String>) {
        let generation = {
            let mut inner = self.inner.lock().unwrap();
            inner.generation += 1;
            inner.message = Some(text.into());
            inner.generation
        };

        let inner = Arc::clone(&self.inner);
        let timeout = self.timeout;
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let mut inner = inner.lock().unwrap();
            if inner.generation == generation {
                inner.message = None;
            }
        });
    }

    /// The currently displayed message, if any
    pub fn read(&self) -> Option<String> {
        self.inner.lock().unwrap().message.clone()
    }
}

impl Default for FeedbackNotifier {
    fn default() -> Self {
        Self::new()
    }
}
