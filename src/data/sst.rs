use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};

use super::coerce::coerce_all;
use super::model::RawTable;
use super::schema::{TableSchema, DAY_OFFSET, TEMPERATURE};

// ---------------------------------------------------------------------------
// Season buckets
// ---------------------------------------------------------------------------

/// Day offsets up to and including this value fall in autumn.
pub const FALL_END: f64 = 120.0;
/// Day offsets above [`FALL_END`] up to and including this value fall in winter.
pub const WINTER_END: f64 = 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Fall,
    Winter,
    SpringSummer,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Fall, Season::Winter, Season::SpringSummer];

    /// Bucket for a day offset: `<= 120` fall, `(120, 240]` winter, above that
    /// spring/summer.
    pub fn from_day_offset(day_offset: f64) -> Self {
        if day_offset <= FALL_END {
            Season::Fall
        } else if day_offset <= WINTER_END {
            Season::Winter
        } else {
            Season::SpringSummer
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::SpringSummer => "Spring/Summer",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Reference date
// ---------------------------------------------------------------------------

/// September 1 of the year before `today`: day offset 0 of the sampling year.
pub fn reference_date_for(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() - 1, 9, 1).unwrap_or_default()
}

/// Calendar date of a day offset. Fractional offsets count whole elapsed
/// days; offsets outside chrono's date range give `None`.
pub fn date_for_offset(reference: NaiveDate, day_offset: f64) -> Option<NaiveDate> {
    let days = day_offset.floor();
    if !days.is_finite() || days.abs() > i64::MAX as f64 {
        return None;
    }
    let delta = Duration::try_days(days as i64)?;
    reference.checked_add_signed(delta)
}

// ---------------------------------------------------------------------------
// SstRecord – one cleaned sea-surface temperature sample
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SstRecord {
    pub day_offset: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    pub date: NaiveDate,
    pub season: Season,
}

/// Extract day offsets and temperatures, drop rows where either fails to
/// coerce, and derive each surviving row's date and season. Source order is
/// kept; it is expected, but not checked, to be increasing in day offset.
pub fn clean_sst(table: &RawTable, schema: &TableSchema, reference: NaiveDate) -> Vec<SstRecord> {
    schema
        .data_rows(table)
        .enumerate()
        .filter_map(|(i, row)| {
            let row_no = i + schema.skip_rows;
            let Some([day_offset, temperature]) =
                coerce_all([schema.get(row, DAY_OFFSET), schema.get(row, TEMPERATURE)])
            else {
                log::debug!("{}: dropping row {row_no}: {row:?}", schema.name);
                return None;
            };
            let Some(date) = date_for_offset(reference, day_offset) else {
                log::debug!(
                    "{}: dropping row {row_no}: day offset {day_offset} is out of date range",
                    schema.name
                );
                return None;
            };
            Some(SstRecord {
                day_offset,
                temperature,
                date,
                season: Season::from_day_offset(day_offset),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregates for the chart
// ---------------------------------------------------------------------------

/// Date span of one season, used for the shaded background and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonSpan {
    pub season: Season,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Mean of the season's dates, rounded to the nearest day.
    pub mean: NaiveDate,
    pub count: usize,
}

/// Span of `season`, or `None` when it has no records.
pub fn season_span(records: &[SstRecord], season: Season) -> Option<SeasonSpan> {
    let days: Vec<i64> = records
        .iter()
        .filter(|r| r.season == season)
        .map(|r| i64::from(r.date.num_days_from_ce()))
        .collect();

    let start = *days.iter().min()?;
    let end = *days.iter().max()?;
    let mean = (days.iter().map(|&d| d as f64).sum::<f64>() / days.len() as f64).round() as i64;

    let to_date = |d: i64| i32::try_from(d).ok().and_then(NaiveDate::from_num_days_from_ce_opt);
    Some(SeasonSpan {
        season,
        start: to_date(start)?,
        end: to_date(end)?,
        mean: to_date(mean)?,
        count: days.len(),
    })
}

/// Spans of every season that has at least one record, in season order.
pub fn season_spans(records: &[SstRecord]) -> Vec<SeasonSpan> {
    Season::ALL
        .iter()
        .filter_map(|&s| season_span(records, s))
        .collect()
}

/// Lowest and highest temperature over all records.
pub fn temperature_extent(records: &[SstRecord]) -> Option<(f64, f64)> {
    records.iter().fold(None, |acc, r| match acc {
        None => Some((r.temperature, r.temperature)),
        Some((lo, hi)) => Some((lo.min(r.temperature), hi.max(r.temperature))),
    })
}
