use chrono::{DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Canonical completion key for a calendar day: the `YYYY-MM-DD` of the UTC
/// instant at that day's local midnight. East of UTC this lands on the
/// previous calendar day; persisted completions were recorded under these
/// shifted keys, so the truncation must not be replaced with the local date.
pub fn date_key(day: NaiveDate) -> String {
    local_midnight(day).naive_utc().date().to_string()
}

/// Most recent Monday, rewinding 6 days from a Sunday.
pub fn start_of_week(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

pub fn start_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Every calendar day from `start` to `end` inclusive, ascending. Empty when
/// `start > end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

fn local_midnight(day: NaiveDate) -> DateTime<Local> {
    match day.and_time(NaiveTime::MIN).and_local_timezone(Local) {
        LocalResult::Single(at) | LocalResult::Ambiguous(at, _) => at,
        // Midnight can be skipped by a DST jump; take the first hour that
        // exists on that day.
        LocalResult::None => (1..24)
            .find_map(|hour| day.and_hms_opt(hour, 0, 0)?.and_local_timezone(Local).earliest())
            .unwrap_or_else(|| Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)).with_timezone(&Local)),
    }
}
