//! Alert Reducer

use crate::actions::AlertAction;
use crate::state::AlertQueue;

/// Reduce alert queue
pub fn reduce_alerts(mut state: AlertQueue, action: &AlertAction) -> AlertQueue {
    match action {
        AlertAction::Push(alert) => {
            state.push(alert.clone());
        }
        AlertAction::Dismiss(index) => {
            if state.dismiss(*index).is_none() {
                log::debug!("No alert at index {} to dismiss", index);
            }
        }
        AlertAction::Clear => {
            state.clear();
        }
    }
    state
}
