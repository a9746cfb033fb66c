//! US equity session classification

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::America::New_York;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading session at a given instant, judged by NYSE regular hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketStatus {
    Closed,
    PreMarket,
    Open,
    AfterHours,
}

/// Regular session bounds in minutes after local midnight
const OPEN_MINUTE: u32 = 9 * 60 + 30;
const CLOSE_MINUTE: u32 = 16 * 60;

impl MarketStatus {
    /// Classify an instant in New York local time
    ///
    /// Weekends are closed regardless of hour. Weekdays are open in
    /// [09:30, 16:00), pre-market before and after-hours after. Exchange
    /// holidays are not modelled.
    pub fn classify(instant: DateTime<Utc>) -> Self {
        let local = instant.with_timezone(&New_York);

        if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
            return Self::Closed;
        }

        let minute = local.hour() * 60 + local.minute();
        if minute < OPEN_MINUTE {
            Self::PreMarket
        } else if minute < CLOSE_MINUTE {
            Self::Open
        } else {
            Self::AfterHours
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::PreMarket => "pre-market",
            Self::Open => "open",
            Self::AfterHours => "after-hours",
        }
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ny(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        New_York
            .with_ymd_and_hms(y, m, d, h, min, s)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_open_boundary() {
        // 2025-03-12 is a Wednesday (EDT)
        assert_eq!(MarketStatus::classify(ny(2025, 3, 12, 9, 30, 0)), MarketStatus::Open);
        assert_eq!(
            MarketStatus::classify(ny(2025, 3, 12, 9, 29, 59)),
            MarketStatus::PreMarket
        );
    }

    #[test]
    fn test_close_boundary() {
        assert_eq!(MarketStatus::classify(ny(2025, 3, 12, 15, 59, 59)), MarketStatus::Open);
        assert_eq!(
            MarketStatus::classify(ny(2025, 3, 12, 16, 0, 0)),
            MarketStatus::AfterHours
        );
        assert_eq!(
            MarketStatus::classify(ny(2025, 3, 12, 23, 59, 0)),
            MarketStatus::AfterHours
        );
    }

    #[test]
    fn test_weekday_session_hours_are_open() {
        // Monday 2025-01-06 through Friday 2025-01-10 (EST)
        for day in 6..=10 {
            for (h, m) in [(9, 30), (10, 0), (12, 15), (15, 0), (15, 59)] {
                assert_eq!(
                    MarketStatus::classify(ny(2025, 1, day, h, m, 0)),
                    MarketStatus::Open,
                    "day {day} {h}:{m}"
                );
            }
        }
    }

    #[test]
    fn test_weekends_closed_at_every_hour() {
        // Saturday 2025-01-11 and Sunday 2025-01-12
        for day in [11, 12] {
            for hour in 0..24 {
                assert_eq!(
                    MarketStatus::classify(ny(2025, 1, day, hour, 45, 0)),
                    MarketStatus::Closed,
                    "day {day} hour {hour}"
                );
            }
        }
    }

    #[test]
    fn test_uses_new_york_not_utc() {
        // 14:00 UTC on a summer Friday is 10:00 EDT
        let instant = Utc.with_ymd_and_hms(2025, 7, 11, 14, 0, 0).unwrap();
        assert_eq!(MarketStatus::classify(instant), MarketStatus::Open);

        // 02:00 UTC Saturday is still Friday evening in New York
        let instant = Utc.with_ymd_and_hms(2025, 7, 12, 2, 0, 0).unwrap();
        assert_eq!(MarketStatus::classify(instant), MarketStatus::AfterHours);
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(serde_json::to_string(&MarketStatus::PreMarket).unwrap(), "\"pre-market\"");
        assert_eq!(serde_json::to_string(&MarketStatus::AfterHours).unwrap(), "\"after-hours\"");
        assert_eq!(MarketStatus::Closed.to_string(), "closed");
    }
}
