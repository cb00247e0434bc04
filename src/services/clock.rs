use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

/// Source of "now" for validation and stats. Everything date-sensitive goes
/// through this trait so tests can pin the calendar.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock. When a UTC offset is configured the host time zone is
/// ignored, keeping "today" and the stats week window stable across
/// deployments.
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn new(utc_offset_minutes: Option<i32>) -> Self {
        let offset = utc_offset_minutes.and_then(|minutes| FixedOffset::east_opt(minutes * 60));
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).naive_local(),
            None => Local::now().naive_local(),
        }
    }
}
