use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Booking, BookingStats};
use crate::services::validation::parse_date;

/// Counts bookings in total, on `today`, and inside the current week. The
/// week runs from the most recent Sunday (inclusive) to the Sunday after
/// (exclusive). Recomputed from a full snapshot on every call; the store is
/// small enough that incremental counters would be pure liability.
pub fn compute(bookings: &[Booking], today: NaiveDate) -> BookingStats {
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    let week_end = week_start + Duration::days(7);

    let mut today_count = 0;
    let mut week_count = 0;
    for booking in bookings {
        // Rows with an unparseable date still count toward the total but
        // are skipped for the calendar-based counters.
        let Some(date) = parse_date(&booking.date) else {
            continue;
        };
        if date == today {
            today_count += 1;
        }
        if date >= week_start && date < week_end {
            week_count += 1;
        }
    }

    BookingStats {
        total_count: bookings.len() as i64,
        today_count,
        week_count,
    }
}
