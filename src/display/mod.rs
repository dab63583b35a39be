//! Terminal display formatting for FleetLog
//!
//! Plain-text rendering of vehicles, usage registers, and the service
//! alert dashboard.

pub mod alerts;
pub mod usage;
pub mod vehicle;

/// Truncate a string to a maximum display width, appending an ellipsis
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
