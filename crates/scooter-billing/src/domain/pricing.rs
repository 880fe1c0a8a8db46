//! Capped daily-rate pricing.
//!
//! Charges are computed from hour/minute-of-day components, not from true
//! elapsed duration. A rental is split into calendar-day segments; each
//! segment is billed at the scooter's per-minute rate and independently
//! clamped to the daily cap. This component-wise arithmetic is the
//! contract inherited from the billing rules as shipped: it can produce
//! nonsensical (even negative) minute counts when the end components sort
//! before the start components, and that behavior is kept as-is. Whether
//! it should be replaced by elapsed-duration arithmetic is a product
//! decision, not a code one.

use chrono::{DateTime, Duration, Timelike, Utc};
use rust_decimal::Decimal;

fn minute_of_day(t: DateTime<Utc>) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

fn minutes_until_midnight(t: DateTime<Utc>) -> i64 {
    60 * (23 - i64::from(t.hour())) + (60 - i64::from(t.minute()))
}

/// Bills `minutes` at `rate`, clamped to `cap` once the product reaches it.
fn capped_segment(minutes: i64, rate: Decimal, cap: Decimal) -> Decimal {
    let amount = Decimal::from(minutes) * rate;
    if amount >= cap {
        cap
    } else {
        amount
    }
}

/// Charge for a completed rental.
///
/// Same calendar day: one segment covering the minute-of-day difference.
/// Otherwise the cursor walks midnight to midnight from `start`; every
/// earlier day bills the minutes left until midnight, the final day bills
/// the minutes from midnight to `end`. Segments are capped independently
/// and summed.
pub fn rental_charge(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    rate: Decimal,
    daily_cap: Decimal,
) -> Decimal {
    if start.date_naive() == end.date_naive() {
        let minutes = minute_of_day(end) - minute_of_day(start);
        return capped_segment(minutes, rate, daily_cap);
    }

    let mut total = Decimal::ZERO;
    let mut cursor = start;
    while cursor <= end {
        if cursor.date_naive() == end.date_naive() {
            total += capped_segment(minute_of_day(end), rate, daily_cap);
        } else {
            total += capped_segment(minutes_until_midnight(cursor), rate, daily_cap);
        }
        // Advances to the next midnight; the step is always >= 1 minute.
        cursor += Duration::minutes(minutes_until_midnight(cursor));
    }

    total
}

/// Estimated charge for a rental still in progress: minute-of-day
/// difference times the rate, with no daily cap.
pub fn accrued_charge(start: DateTime<Utc>, now: DateTime<Utc>, rate: Decimal) -> Decimal {
    let minutes = minute_of_day(now) - minute_of_day(start);
    Decimal::from(minutes) * rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap()
    }

    #[test]
    fn same_day_short_rental_is_uncapped() {
        let charge = rental_charge(at(5, 10, 20), at(5, 11, 30), dec!(0.02), dec!(20));
        assert_eq!(charge, dec!(1.4));
    }

    #[test]
    fn same_day_minutes_come_from_clock_components() {
        // 10:59 -> 12:01 is 62 minutes of wall clock and of components.
        let charge = rental_charge(at(5, 10, 59), at(5, 12, 1), dec!(0.1), dec!(20));
        assert_eq!(charge, dec!(6.2));
    }

    #[test]
    fn same_day_long_rental_hits_the_cap() {
        let charge = rental_charge(at(5, 8, 0), at(5, 18, 0), dec!(0.1), dec!(20));
        assert_eq!(charge, dec!(20));
    }

    #[test]
    fn same_day_zero_duration_is_free() {
        let charge = rental_charge(at(5, 9, 30), at(5, 9, 30), dec!(0.1), dec!(20));
        assert_eq!(charge, Decimal::ZERO);
    }

    #[test]
    fn charge_exactly_at_cap_is_the_cap() {
        // 200 minutes at 0.1 is exactly 20.
        let charge = rental_charge(at(5, 9, 0), at(5, 12, 20), dec!(0.1), dec!(20));
        assert_eq!(charge, dec!(20));
    }

    #[test]
    fn five_minutes_before_midnight_splits_into_two_segments() {
        let charge = rental_charge(at(5, 23, 55), at(6, 14, 30), dec!(0.1), dec!(20));
        // 0.5 for the last five minutes of day one, capped 20 for day two.
        assert_eq!(charge, dec!(20.5));
    }

    #[test]
    fn two_full_days_cap_every_segment() {
        let charge = rental_charge(at(3, 10, 0), at(5, 10, 0), dec!(0.05), dec!(20));
        assert_eq!(charge, dec!(60));
    }

    #[test]
    fn cheap_multi_day_rental_stays_under_the_cap() {
        let charge = rental_charge(at(3, 23, 0), at(5, 0, 30), dec!(0.01), dec!(20));
        // 60 min to midnight + a 1440-minute day + 30 min after midnight.
        assert_eq!(charge, dec!(15.3));
    }

    #[test]
    fn custom_cap_is_honored() {
        let charge = rental_charge(at(5, 10, 0), at(5, 11, 40), dec!(0.1), dec!(5));
        assert_eq!(charge, dec!(5));
    }

    #[test]
    fn accrued_charge_is_uncapped() {
        let charge = accrued_charge(at(5, 8, 0), at(5, 18, 0), dec!(0.1));
        assert_eq!(charge, dec!(60));
    }

    #[test]
    fn accrued_charge_crossing_an_hour_boundary() {
        let charge = accrued_charge(at(5, 9, 55), at(5, 10, 5), dec!(0.5));
        assert_eq!(charge, dec!(5));
    }
}
