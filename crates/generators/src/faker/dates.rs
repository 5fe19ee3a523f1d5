//! Random dates relative to a reference instant.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use rand::Rng;

/// Uniform instant in `[start, end]` (swapped if reversed).
pub fn datetime_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let span = (hi - lo).num_seconds();
    if span == 0 {
        return lo;
    }
    lo + Duration::seconds(rng.gen_range(0..=span))
}

/// Uniform instant within the last `days` days before `now`.
pub fn datetime_within_days<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    days: i64,
) -> DateTime<Utc> {
    datetime_between(rng, now - Duration::days(days), now)
}

/// Uniform calendar date in `[start, end]` (swapped if reversed).
pub fn date_between<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let span = (hi - lo).num_days();
    lo + Duration::days(rng.gen_range(0..=span))
}

/// Date of birth for someone aged `min_age..=max_age` on `today`.
pub fn date_of_birth<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    min_age: u32,
    max_age: u32,
) -> NaiveDate {
    let latest = years_before(today, min_age);
    // One day after the (max_age + 1)th birthday.
    let earliest = years_before(today, max_age + 1) + Duration::days(1);
    date_between(rng, earliest, latest)
}

/// Full calendar years between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth).unwrap_or(0)
}

/// Same calendar day `years` earlier (clamped to month end).
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    months_before(date, years * 12)
}

pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

pub fn years_after(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MAX)
}
