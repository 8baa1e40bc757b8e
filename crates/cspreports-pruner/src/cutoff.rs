use crate::{PruneError, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use cspreports_config::{TimeSettings, constants};
use std::fmt;

/// The instant before which reports are deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    /// Wall-clock time, compared directly against naive `created` values.
    Naive(NaiveDateTime),
    /// Midnight localized to the configured zone.
    Aware(DateTime<Tz>),
}

impl Cutoff {
    /// Converts the cutoff into the representation `created` is stored in.
    pub fn to_storage(&self) -> NaiveDateTime {
        match self {
            Cutoff::Naive(naive) => *naive,
            Cutoff::Aware(aware) => aware.naive_utc(),
        }
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cutoff::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%d %H:%M:%S")),
            Cutoff::Aware(aware) => write!(f, "{}", aware.format("%Y-%m-%d %H:%M:%S%:z")),
        }
    }
}

/// Parses `YYYY-M-D` with a four digit year and one or two digit month and
/// day. Returns `None` for anything else, including dates that do not exist.
///
/// Only ASCII digits are accepted and the whole string must match, so a
/// trailing newline or non-ASCII numerals are rejected rather than silently
/// trimmed or transliterated.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(year, 4, 4) || !digits(month, 1, 2) || !digits(day, 1, 2) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Computes the cutoff for `input` relative to the current time.
pub fn compute_cutoff(input: Option<&str>, settings: &TimeSettings) -> Result<Cutoff> {
    compute_cutoff_at(input, settings, Utc::now())
}

/// Computes the cutoff for `input`, treating `now` as the current instant.
///
/// An absent or empty input yields the start of today in the configured zone
/// minus [`constants::DEFAULT_OFFSET_DAYS`]. Otherwise the input must be a
/// calendar date and the cutoff is midnight of that date.
pub fn compute_cutoff_at(
    input: Option<&str>,
    settings: &TimeSettings,
    now: DateTime<Utc>,
) -> Result<Cutoff> {
    let date = match input.filter(|value| !value.is_empty()) {
        Some(value) => {
            parse_date(value).ok_or_else(|| PruneError::InvalidDateArgument(value.to_string()))?
        }
        None => {
            let today = now.with_timezone(&settings.time_zone).date_naive();
            today - Duration::days(constants::DEFAULT_OFFSET_DAYS)
        }
    };

    let midnight = date.and_time(chrono::NaiveTime::MIN);

    if settings.use_tz {
        Ok(Cutoff::Aware(localize(&settings.time_zone, midnight)))
    } else {
        Ok(Cutoff::Naive(midnight))
    }
}

// Midnight can fall in a DST gap; move forward to the first existing local time.
fn localize(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    let mut candidate = local;
    for _ in 0..48 {
        if let Some(aware) = tz.from_local_datetime(&candidate).earliest() {
            return aware;
        }
        candidate += Duration::minutes(30);
    }
    tz.from_utc_datetime(&local)
}
