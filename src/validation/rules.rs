//! Pure field rules. Each returns `Some(message)` when the value fails.
//!
//! `label` is the human name of the field as it appears in messages
//! (`"First Name"`), not the key the failure is filed under (`"FirstName"`).

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

pub const HANDICAP_MIN: i32 = 0;
pub const HANDICAP_MAX: i32 = 54;
pub const SCORE_MIN: i32 = 50;
pub const SCORE_MAX: i32 = 130;
/// First year a participation may be recorded for
pub const FIRST_YEAR: i32 = 1916;
pub const NAME_MAX_LENGTH: usize = 100;
pub const EMAIL_MAX_LENGTH: usize = 255;
pub const MEMBER_TYPE_NAME_MAX_LENGTH: usize = 50;

pub fn current_year() -> i32 {
    Utc::now().year()
}

pub fn not_empty(label: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("'{}' must not be empty.", label))
    } else {
        None
    }
}

/// Identity fields: 0 is the "not supplied" value
pub fn not_default(label: &str, value: i32) -> Option<String> {
    if value == 0 {
        Some(format!("'{}' must not be empty.", label))
    } else {
        None
    }
}

/// Dates: 1970-01-01 (the deserialization default) is "not supplied"
pub fn date_not_default(label: &str, value: NaiveDate) -> Option<String> {
    if value == NaiveDate::default() {
        Some(format!("'{}' must not be empty.", label))
    } else {
        None
    }
}

pub fn max_length(label: &str, value: &str, max: usize) -> Option<String> {
    let length = value.chars().count();
    if length > max {
        Some(format!(
            "'{}' must be {} characters or fewer. You entered {} characters.",
            label, max, length
        ))
    } else {
        None
    }
}

/// One '@' with something on both sides. Deliverability is not checked.
pub fn email_address(label: &str, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if valid {
        None
    } else {
        Some(format!("'{}' is not a valid email address.", label))
    }
}

pub fn inclusive_between(label: &str, value: i32, from: i32, to: i32) -> Option<String> {
    if value < from || value > to {
        Some(format!(
            "'{}' must be between {} and {}. You entered {}.",
            label, from, to, value
        ))
    } else {
        None
    }
}

/// Range check that passes when the value is absent
pub fn optional_between(label: &str, value: Option<i32>, from: i32, to: i32) -> Option<String> {
    value.and_then(|v| inclusive_between(label, v, from, to))
}

pub fn year(label: &str, value: i32) -> Option<String> {
    inclusive_between(label, value, FIRST_YEAR, current_year())
}

pub fn not_negative(label: &str, value: Option<Decimal>) -> Option<String> {
    match value {
        Some(v) if v.is_sign_negative() && !v.is_zero() => {
            Some(format!("'{}' must be greater than or equal to '0'.", label))
        }
        _ => None,
    }
}

pub fn one_of(label: &str, value: &str, allowed: &[&str]) -> Option<String> {
    if value.trim().is_empty() || allowed.contains(&value) {
        None
    } else {
        Some(format!(
            "'{}' must be one of the following: {}",
            label,
            allowed.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_empty_treats_whitespace_as_empty() {
        assert_eq!(not_empty("First Name", "  ").as_deref(), Some("'First Name' must not be empty."));
        assert!(not_empty("First Name", "Jane").is_none());
    }

    #[test]
    fn range_message_names_bounds_and_value() {
        assert_eq!(
            inclusive_between("Handicap", 55, HANDICAP_MIN, HANDICAP_MAX).as_deref(),
            Some("'Handicap' must be between 0 and 54. You entered 55.")
        );
        assert!(inclusive_between("Handicap", 0, HANDICAP_MIN, HANDICAP_MAX).is_none());
        assert!(inclusive_between("Handicap", 54, HANDICAP_MIN, HANDICAP_MAX).is_none());
        assert!(inclusive_between("Score", 49, SCORE_MIN, SCORE_MAX).is_some());
        assert!(inclusive_between("Score", 131, SCORE_MIN, SCORE_MAX).is_some());
    }

    #[test]
    fn absent_optional_values_pass() {
        assert!(optional_between("Score", None, SCORE_MIN, SCORE_MAX).is_none());
        assert!(not_negative("Fee", None).is_none());
    }

    #[test]
    fn year_bounds_follow_calendar() {
        assert!(year("Year", FIRST_YEAR).is_none());
        assert!(year("Year", current_year()).is_none());
        assert_eq!(
            year("Year", 1915).as_deref(),
            Some(format!("'Year' must be between 1916 and {}. You entered 1915.", current_year()).as_str())
        );
        assert!(year("Year", current_year() + 1).is_some());
    }

    #[test]
    fn email_needs_both_sides_of_at() {
        assert!(email_address("Email", "jane@x.com").is_none());
        assert!(email_address("Email", "jane").is_some());
        assert!(email_address("Email", "@x.com").is_some());
        assert!(email_address("Email", "jane@").is_some());
        assert!(email_address("Email", "a@b@c").is_some());
        // Emptiness is reported by not_empty
        assert!(email_address("Email", "").is_none());
    }

    #[test]
    fn one_of_lists_allowed_values() {
        let message = one_of("Format", "Bingo", &["Stroke Play", "Match Play"]).unwrap();
        assert_eq!(message, "'Format' must be one of the following: Stroke Play, Match Play");
        assert!(one_of("Format", "Match Play", &["Stroke Play", "Match Play"]).is_none());
    }

    #[test]
    fn negative_fee_rejected_zero_allowed() {
        assert!(not_negative("Fee", Some(Decimal::new(-1, 2))).is_some());
        assert!(not_negative("Fee", Some(Decimal::ZERO)).is_none());
        assert!(not_negative("Fee", Some(Decimal::new(12550, 2))).is_none());
    }

    #[test]
    fn max_length_counts_characters() {
        assert!(max_length("Name", &"a".repeat(50), 50).is_none());
        assert_eq!(
            max_length("Name", &"a".repeat(51), 50).as_deref(),
            Some("'Name' must be 50 characters or fewer. You entered 51 characters.")
        );
    }

    #[test]
    fn zero_identity_is_empty() {
        assert!(not_default("Golfer Id", 0).is_some());
        assert!(not_default("Golfer Id", 3).is_none());
    }
}
