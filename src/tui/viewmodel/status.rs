//! Status line message management.
//!
//! Status messages briefly report the outcome of an action (e.g. "Copied
//! buy link") and clear themselves after a while.

use std::time::{Duration, Instant};

/// Default lifetime of a status message.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// A temporary status message with optional auto-clear.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    set_at: Option<Instant>,
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Drop the message once its lifetime is over. Called on every tick.
    pub fn expire(&mut self) {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.clear();
            }
        }
    }

    /// Current message without checking expiry.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut status = StatusMessage::new();
        status.set("Copied");
        assert_eq!(status.peek(), Some("Copied"));
        status.clear();
        assert!(status.peek().is_none());
    }

    #[test]
    fn test_no_auto_clear_without_duration() {
        let mut status = StatusMessage::new();
        status.set("stays");
        status.expire();
        assert_eq!(status.peek(), Some("stays"));
    }

    #[test]
    fn test_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::ZERO);
        status.set("gone");
        status.expire();
        assert!(status.peek().is_none());
    }
}
