//! Seniority (years of service) calculation.
//!
//! This module computes whole years elapsed since an employee's hire
//! date, anniversary-aware: the count only increments once the hire
//! date's month and day have been reached in the current year.

use chrono::{Datelike, NaiveDate};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An employee's seniority: whole years of service, or a not-applicable
/// marker when no hire date is on record.
///
/// Serializes as a bare integer for known values and as the string
/// `"N/A"` for the marker, matching the display form.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::Seniority;
///
/// assert_eq!(Seniority::Years(4).to_string(), "4");
/// assert_eq!(Seniority::NotApplicable.to_string(), "N/A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    /// Whole years elapsed since the hire date. Negative when the hire
    /// date lies in the future.
    Years(i32),
    /// No hire date on record.
    NotApplicable,
}

impl std::fmt::Display for Seniority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seniority::Years(years) => write!(f, "{years}"),
            Seniority::NotApplicable => write!(f, "N/A"),
        }
    }
}

impl Serialize for Seniority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Seniority::Years(years) => serializer.serialize_i32(*years),
            Seniority::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for Seniority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeniorityVisitor;

        impl<'de> Visitor<'de> for SeniorityVisitor {
            type Value = Seniority;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an integer year count or the string \"N/A\"")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Seniority, E>
            where
                E: de::Error,
            {
                i32::try_from(value)
                    .map(Seniority::Years)
                    .map_err(|_| E::custom("year count out of range"))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Seniority, E>
            where
                E: de::Error,
            {
                i32::try_from(value)
                    .map(Seniority::Years)
                    .map_err(|_| E::custom("year count out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<Seniority, E>
            where
                E: de::Error,
            {
                if value == "N/A" {
                    Ok(Seniority::NotApplicable)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(SeniorityVisitor)
    }
}

/// Computes whole years of service from a hire date to a reference date.
///
/// Returns [`Seniority::NotApplicable`] when the hire date is absent.
/// Otherwise the result is the calendar-year difference, decremented by
/// one when the reference date's month and day precede the hire date's,
/// so the count reflects completed anniversaries rather than plain year
/// subtraction. A future hire date yields a negative count.
///
/// # Arguments
///
/// * `hire_date` - The employee's hire date, if known
/// * `today` - The reference date to measure against
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::{Seniority, years_of_service};
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2020, 8, 15);
///
/// // The day before the fourth anniversary.
/// let today = NaiveDate::from_ymd_opt(2024, 8, 14).unwrap();
/// assert_eq!(years_of_service(hired, today), Seniority::Years(3));
///
/// // The anniversary itself.
/// let today = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
/// assert_eq!(years_of_service(hired, today), Seniority::Years(4));
///
/// assert_eq!(years_of_service(None, today), Seniority::NotApplicable);
/// ```
pub fn years_of_service(hire_date: Option<NaiveDate>, today: NaiveDate) -> Seniority {
    let Some(hired) = hire_date else {
        return Seniority::NotApplicable;
    };

    let mut years = today.year() - hired.year();
    if (today.month(), today.day()) < (hired.month(), hired.day()) {
        years -= 1;
    }
    Seniority::Years(years)
}
