//! Alert Queue

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Severity of an alert (determines icon and color in the view)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    Info,
    Warning,
    Error,
}

/// A single alert with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// When the alert was raised
    pub timestamp: DateTime<Local>,
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    /// Create a new alert with current timestamp
    pub fn new(severity: AlertSeverity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Error, message)
    }
}

/// Pending alerts (oldest at front)
#[derive(Debug, Clone, PartialEq)]
pub struct AlertQueue {
    pub alerts: VecDeque<Alert>,
    /// Maximum alerts to keep (prevent unbounded growth)
    pub max_len: usize,
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::with_capacity(100)
    }
}

impl AlertQueue {
    pub fn with_capacity(max_len: usize) -> Self {
        Self {
            alerts: VecDeque::new(),
            max_len: max_len.max(1),
        }
    }

    /// Append an alert, dropping the oldest if over limit
    pub fn push(&mut self, alert: Alert) {
        self.alerts.push_back(alert);
        if self.alerts.len() > self.max_len {
            self.alerts.pop_front();
        }
    }

    /// Remove the alert at `index`, if present
    pub fn dismiss(&mut self, index: usize) -> Option<Alert> {
        self.alerts.remove(index)
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_trims_oldest() {
        let mut queue = AlertQueue::with_capacity(2);
        queue.push(Alert::info("one"));
        queue.push(Alert::info("two"));
        queue.push(Alert::error("three"));

        let messages: Vec<_> = queue.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = AlertQueue::default();
        queue.push(Alert::info("keep"));
        queue.push(Alert::info("drop"));

        let dismissed = queue.dismiss(1).unwrap();
        assert_eq!(dismissed.message, "drop");
        assert_eq!(queue.len(), 1);
        assert!(queue.dismiss(5).is_none());
    }
}
