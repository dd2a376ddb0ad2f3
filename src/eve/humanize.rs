//! Human-readable spans and security labels for replies.

use chrono::{DateTime, Utc};

/// The largest unit with a value of at least one, rounded and pluralised:
/// `1 day`, `3 weeks`, `2 years`. Zero or negative spans are `just now`.
pub fn humanize_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let days = delta.num_days() as f64;
    let seconds = (delta.num_seconds() - delta.num_days() * 86_400) as f64;

    let units = [
        ("year", days / 365.0),
        ("month", days / 30.0),
        ("week", days / 7.0),
        ("day", days),
        ("hour", seconds / 3600.0),
        ("minute", seconds / 60.0),
        ("second", seconds),
    ];
    for (unit, value) in units {
        if value >= 1.0 {
            let rounded = value.round() as u64;
            let plural = if rounded > 1 { "s" } else { "" };
            return format!("{} {}{}", rounded, unit, plural);
        }
    }
    "just now".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityClass {
    High,
    Low,
    Null,
}

impl SecurityClass {
    pub fn of(security: f64) -> Self {
        if security >= 0.45 {
            SecurityClass::High
        } else if security > 0.0 {
            SecurityClass::Low
        } else {
            SecurityClass::Null
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SecurityClass::High => "HIGH",
            SecurityClass::Low => "LOW",
            SecurityClass::Null => "NULL",
        }
    }
}

/// Security as shown in game: one decimal, with tiny positive values shown as
/// 0.1 and values that would print as `-0.0` shown as 0.0.
pub fn display_security(security: f64) -> String {
    if security > 0.0 && security < 0.05 {
        "0.1".to_string()
    } else if security > -0.05 && security <= 0.0 {
        "0.0".to_string()
    } else {
        format!("{:.1}", security)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(days: i64, secs: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        (now - Duration::days(days) - Duration::seconds(secs), now)
    }

    #[test]
    fn picks_largest_unit() {
        let (then, now) = at(1, 0);
        assert_eq!(humanize_since(then, now), "1 day");
        let (then, now) = at(21, 0);
        assert_eq!(humanize_since(then, now), "3 weeks");
        let (then, now) = at(700, 0);
        assert_eq!(humanize_since(then, now), "2 years");
        let (then, now) = at(0, 5400);
        assert_eq!(humanize_since(then, now), "2 hours");
        let (then, now) = at(0, 1);
        assert_eq!(humanize_since(then, now), "1 second");
    }

    #[test]
    fn zero_and_future_are_just_now() {
        let (then, now) = at(0, 0);
        assert_eq!(humanize_since(then, now), "just now");
        assert_eq!(humanize_since(now + Duration::hours(2), now), "just now");
    }

    #[test]
    fn security_classes_stay_distinct() {
        assert_eq!(SecurityClass::of(0.946), SecurityClass::High);
        assert_eq!(SecurityClass::of(0.45), SecurityClass::High);
        assert_eq!(SecurityClass::of(0.3), SecurityClass::Low);
        assert_eq!(SecurityClass::of(0.01), SecurityClass::Low);
        assert_eq!(SecurityClass::of(0.0), SecurityClass::Null);
        assert_eq!(SecurityClass::of(-0.4), SecurityClass::Null);
    }

    #[test]
    fn security_display() {
        assert_eq!(display_security(0.945913), "0.9");
        assert_eq!(display_security(0.02), "0.1");
        assert_eq!(display_security(-0.26), "-0.3");
        assert_eq!(display_security(-0.04), "0.0");
        assert_eq!(display_security(-0.0), "0.0");
        assert_eq!(display_security(0.0), "0.0");
    }
}
