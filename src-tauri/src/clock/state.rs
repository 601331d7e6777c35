use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The rendered face of the widget, resampled from the wall clock each tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockState {
    /// Zero-padded 24-hour time, e.g. "07:04".
    pub time: String,
    /// Abbreviated month plus unpadded day, e.g. "Mar 5".
    pub date: String,
}

impl Default for ClockState {
    fn default() -> Self {
        // Placeholder shown until the first tick lands.
        Self {
            time: "--:--".into(),
            date: String::new(),
        }
    }
}

impl ClockState {
    pub fn sample(now: DateTime<Local>) -> Self {
        Self {
            time: now.format("%H:%M").to_string(),
            date: now.format("%b %-d").to_string(),
        }
    }

    pub fn now() -> Self {
        Self::sample(Local::now())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_zero_padded_24h_time() {
        let sampled = ClockState::sample(Local.with_ymd_and_hms(2026, 3, 5, 7, 4, 9).unwrap());
        assert_eq!(sampled.time, "07:04");
        assert_eq!(sampled.date, "Mar 5");
    }

    #[test]
    fn formats_midnight_and_double_digit_day() {
        let sampled = ClockState::sample(Local.with_ymd_and_hms(2026, 12, 31, 0, 0, 59).unwrap());
        assert_eq!(sampled.time, "00:00");
        assert_eq!(sampled.date, "Dec 31");
    }

    #[test]
    fn afternoon_stays_24_hour() {
        let sampled = ClockState::sample(Local.with_ymd_and_hms(2026, 8, 30, 23, 59, 0).unwrap());
        assert_eq!(sampled.time, "23:59");
        assert_eq!(sampled.date, "Aug 30");
    }

    #[test]
    fn default_shows_placeholder_until_first_tick() {
        let state = ClockState::default();
        assert_eq!(state.time, "--:--");
        assert!(state.date.is_empty());
    }
}
