//! Date display formatting.
//!
//! Publication dates are formatted with Moment-style tokens (`MMM DD, YYYY`)
//! so the configuration surface matches what blog tooling users expect, or
//! with the `relative` pseudo-format ("3 days ago").

use chrono::{DateTime, Utc};

/// Token table, longest match first.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("A", "%p"),
];

/// Format `date` according to a Moment-style token string.
pub fn format_tokens(date: DateTime<Utc>, format: &str) -> String {
    let mut chrono_fmt = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while !rest.is_empty() {
        for (token, replacement) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                chrono_fmt.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }
        let ch = rest.chars().next().unwrap();
        if ch == '%' {
            chrono_fmt.push_str("%%");
        } else {
            chrono_fmt.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }

    date.format(&chrono_fmt).to_string()
}

/// Bucket the elapsed time since `date` into a human phrase.
///
/// Anything under a minute (including clock skew into the future) reads as
/// "Just now".
pub fn format_relative(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return pluralize(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return pluralize(hours, "hour");
    }

    let days = hours / 24;
    if days < 7 {
        return pluralize(days, "day");
    }
    if days < 30 {
        return pluralize(days / 7, "week");
    }
    if days < 365 {
        return pluralize(days / 30, "month");
    }
    pluralize(days / 365, "year")
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    #[test]
    fn test_default_token_format() {
        assert_eq!(format_tokens(sample_date(), "MMM DD, YYYY"), "Mar 05, 2024");
    }

    #[test]
    fn test_long_and_short_tokens() {
        assert_eq!(
            format_tokens(sample_date(), "MMMM D YYYY"),
            "March 5 2024"
        );
        assert_eq!(format_tokens(sample_date(), "DD/MM/YY"), "05/03/24");
        assert_eq!(format_tokens(sample_date(), "M/D"), "3/5");
    }

    #[test]
    fn test_time_tokens() {
        assert_eq!(format_tokens(sample_date(), "HH:mm:ss"), "14:07:09");
        assert_eq!(format_tokens(sample_date(), "hh:mm A"), "02:07 PM");
    }

    #[test]
    fn test_literal_passthrough() {
        assert_eq!(
            format_tokens(sample_date(), "YYYY-MM-DD 100%"),
            "2024-03-05 100%"
        );
    }

    #[test]
    fn test_relative_just_now() {
        let now = sample_date();
        assert_eq!(format_relative(now - Duration::seconds(30), now), "Just now");
        // Future timestamps bucket into "Just now" as well.
        assert_eq!(format_relative(now + Duration::hours(1), now), "Just now");
    }

    #[test]
    fn test_relative_singular_plural() {
        let now = sample_date();
        assert_eq!(
            format_relative(now - Duration::minutes(1), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative(now - Duration::minutes(45), now),
            "45 minutes ago"
        );
        assert_eq!(format_relative(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_relative(now - Duration::days(1), now), "1 day ago");
        assert_eq!(format_relative(now - Duration::days(13), now), "1 week ago");
        assert_eq!(
            format_relative(now - Duration::days(90), now),
            "3 months ago"
        );
        assert_eq!(
            format_relative(now - Duration::days(800), now),
            "2 years ago"
        );
    }
}
