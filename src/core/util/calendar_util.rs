//! Calendar-aware alignment and stepping over UTC instants.
//!
//! Month and year arithmetic goes through chrono's `Months` so buckets keep
//! their real calendar lengths.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Timelike, Utc};

use crate::domain::stats::model::granularity::CalendarUnit;

/// First instant of the `unit` containing `t`.
pub fn start_of(t: DateTime<Utc>, unit: CalendarUnit) -> Option<DateTime<Utc>> {
    let date = t.date_naive();

    let naive = match unit {
        CalendarUnit::Minute => date.and_hms_opt(t.hour(), t.minute(), 0)?,
        CalendarUnit::Hour => date.and_hms_opt(t.hour(), 0, 0)?,
        CalendarUnit::Day => date.and_time(NaiveTime::MIN),
        CalendarUnit::Week => {
            // ISO week: Monday 00:00
            let back = i64::from(date.weekday().num_days_from_monday());
            date.checked_sub_signed(Duration::days(back))?
                .and_time(NaiveTime::MIN)
        }
        CalendarUnit::Month => date.with_day(1)?.and_time(NaiveTime::MIN),
        CalendarUnit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)?.and_time(NaiveTime::MIN),
    };

    Some(naive.and_utc())
}

/// Last millisecond of the `unit` containing `t`.
pub fn end_of(t: DateTime<Utc>, unit: CalendarUnit) -> Option<DateTime<Utc>> {
    let next = add_units(start_of(t, unit)?, unit, 1)?;
    next.checked_sub_signed(Duration::milliseconds(1))
}

/// `t` shifted by `amount` units (negative steps go back in time).
pub fn add_units(t: DateTime<Utc>, unit: CalendarUnit, amount: i64) -> Option<DateTime<Utc>> {
    match unit {
        CalendarUnit::Minute => t.checked_add_signed(Duration::try_minutes(amount)?),
        CalendarUnit::Hour => t.checked_add_signed(Duration::try_hours(amount)?),
        CalendarUnit::Day => t.checked_add_signed(Duration::try_days(amount)?),
        CalendarUnit::Week => t.checked_add_signed(Duration::try_weeks(amount)?),
        CalendarUnit::Month => add_months(t, amount),
        CalendarUnit::Year => add_months(t, amount.checked_mul(12)?),
    }
}

fn add_months(t: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        t.checked_add_months(magnitude)
    } else {
        t.checked_sub_months(magnitude)
    }
}

/// Snap a range start down to its unit boundary.
pub fn align_start(start: DateTime<Utc>, unit: CalendarUnit) -> Option<DateTime<Utc>> {
    start_of(start, unit)
}

/// Snap an exclusive range end up to one millisecond past the end of the unit
/// holding its last instant. An end already on a boundary is kept.
pub fn align_end(end: DateTime<Utc>, unit: CalendarUnit) -> Option<DateTime<Utc>> {
    let last_instant = end.checked_sub_signed(Duration::milliseconds(1))?;
    end_of(last_instant, unit)?.checked_add_signed(Duration::milliseconds(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_start_of_each_unit() {
        // Wednesday
        let t = utc(2024, 5, 15, 13, 47, 12) + Duration::milliseconds(345);

        assert_eq!(start_of(t, CalendarUnit::Minute), Some(utc(2024, 5, 15, 13, 47, 0)));
        assert_eq!(start_of(t, CalendarUnit::Hour), Some(utc(2024, 5, 15, 13, 0, 0)));
        assert_eq!(start_of(t, CalendarUnit::Day), Some(utc(2024, 5, 15, 0, 0, 0)));
        assert_eq!(start_of(t, CalendarUnit::Week), Some(utc(2024, 5, 13, 0, 0, 0)));
        assert_eq!(start_of(t, CalendarUnit::Month), Some(utc(2024, 5, 1, 0, 0, 0)));
        assert_eq!(start_of(t, CalendarUnit::Year), Some(utc(2024, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_week_starts_on_monday_even_from_sunday() {
        let sunday = utc(2024, 5, 19, 23, 0, 0);
        assert_eq!(start_of(sunday, CalendarUnit::Week), Some(utc(2024, 5, 13, 0, 0, 0)));
    }

    #[test]
    fn test_end_of_month_is_last_millisecond() {
        let t = utc(2024, 2, 10, 0, 0, 0);
        let expected = utc(2024, 3, 1, 0, 0, 0) - Duration::milliseconds(1);
        assert_eq!(end_of(t, CalendarUnit::Month), Some(expected));
    }

    #[test]
    fn test_add_months_keeps_calendar_lengths() {
        let jan = utc(2023, 1, 1, 0, 0, 0);
        assert_eq!(add_units(jan, CalendarUnit::Month, 1), Some(utc(2023, 2, 1, 0, 0, 0)));
        assert_eq!(add_units(jan, CalendarUnit::Month, 2), Some(utc(2023, 3, 1, 0, 0, 0)));
        assert_eq!(add_units(jan, CalendarUnit::Year, 1), Some(utc(2024, 1, 1, 0, 0, 0)));
        assert_eq!(add_units(jan, CalendarUnit::Month, -1), Some(utc(2022, 12, 1, 0, 0, 0)));
    }

    #[test]
    fn test_align_end_rounds_up_mid_unit() {
        let end = utc(2024, 5, 15, 13, 47, 12);
        assert_eq!(align_end(end, CalendarUnit::Day), Some(utc(2024, 5, 16, 0, 0, 0)));
        assert_eq!(align_end(end, CalendarUnit::Hour), Some(utc(2024, 5, 15, 14, 0, 0)));
    }

    #[test]
    fn test_alignment_is_idempotent() {
        let t = utc(2024, 5, 15, 13, 47, 12);
        for unit in [
            CalendarUnit::Minute,
            CalendarUnit::Hour,
            CalendarUnit::Day,
            CalendarUnit::Week,
            CalendarUnit::Month,
            CalendarUnit::Year,
        ] {
            let start = align_start(t, unit).unwrap();
            assert_eq!(align_start(start, unit), Some(start));

            let end = align_end(t, unit).unwrap();
            assert_eq!(align_end(end, unit), Some(end));
            assert!(start <= t && t < end);
        }
    }
}
