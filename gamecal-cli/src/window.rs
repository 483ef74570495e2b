//! Rolling fetch window.

use chrono::{Duration, Utc};

/// Time window for the release query, as unix timestamp bounds.
#[derive(Debug, Clone, Copy)]
pub struct FetchWindow {
    pub start: i64,
    pub end: i64,
}

impl FetchWindow {
    /// Window spanning `days_past` before now to `days_future` after now,
    /// recomputed fresh on every run.
    pub fn rolling(days_past: i64, days_future: i64) -> Self {
        let now = Utc::now();

        FetchWindow {
            start: (now - Duration::days(days_past)).timestamp(),
            end: (now + Duration::days(days_future)).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_window_spans_the_requested_days() {
        let window = FetchWindow::rolling(30, 365);

        assert!(window.start < window.end);
        assert_eq!(window.end - window.start, (30 + 365) * 24 * 60 * 60);
    }

    #[test]
    fn test_window_straddles_now() {
        let now = Utc::now().timestamp();
        let window = FetchWindow::rolling(30, 365);

        assert!(window.start <= now);
        assert!(window.end >= now);
    }
}
