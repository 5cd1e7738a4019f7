use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Identifies "today" for gating, e.g. `5 December`.
///
/// The month name is always English (chrono's `%B`), whatever the viewer's
/// locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// Derived from the local wall clock, without timezone normalization.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{} {}", date.day(), date.format("%B")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_is_not_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap();
        assert_eq!(DateKey::from_date(date).as_str(), "5 December");
    }

    #[test]
    fn uses_full_month_name() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 24).unwrap();
        assert_eq!(DateKey::from_date(date).to_string(), "24 January");
    }

    #[test]
    fn same_day_in_different_years_share_a_key() {
        let a = DateKey::from_date(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        let b = DateKey::from_date(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(a, b);
    }
}
