//! Alert actions

use crate::state::Alert;

/// Actions for the alert queue
#[derive(Debug, Clone, PartialEq)]
pub enum AlertAction {
    /// Append an alert
    Push(Alert),
    /// Remove the alert at the given queue index
    Dismiss(usize),
    /// Remove all alerts
    Clear,
}
