pub mod alert_reducer;
pub mod app_reducer;
pub mod bootstrap_reducer;
pub mod session_reducer;
