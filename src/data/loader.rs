use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

use super::filter::{self, FilterSelection};
use super::model::{TripRecord, TripTable, DAY_NAMES};

/// Timestamp layout used by all three city exports.
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the selected city's dataset and apply the month/day filters.
///
/// A missing or malformed file is fatal for the session; the error
/// propagates to the caller untouched.
pub fn load_city(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let path = data_dir.join(selection.city.data_file());
    let file =
        File::open(&path).with_context(|| format!("opening dataset {}", path.display()))?;
    let trips =
        read_trips(file).with_context(|| format!("reading dataset {}", path.display()))?;

    let loaded = trips.len();
    let table = TripTable::new(filter::apply(trips, selection.month, selection.day));
    log::info!(
        "{}: {loaded} trips loaded, {} after filtering",
        selection.city,
        table.len()
    );
    if table.is_empty() {
        log::warn!("{}: no trips match the current filters", selection.city);
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV deserialization
// ---------------------------------------------------------------------------

/// One row as it appears in the CSV. Columns missing from a city's export
/// (Washington has no demographics) deserialize to `None`; columns the
/// reports never touch (`End Time`, the unnamed index) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration")]
    duration_secs: f64,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Parse every row, deriving the month / weekday / hour columns from the
/// start timestamp.
fn read_trips<R: Read>(rdr: R) -> Result<Vec<TripRecord>> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut trips = Vec::new();

    for (row_no, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT)
            .with_context(|| format!("row {row_no}: invalid start time '{}'", raw.start_time))?;

        trips.push(TripRecord {
            month: start_time.month(),
            weekday: DAY_NAMES[start_time.weekday().num_days_from_monday() as usize],
            hour: start_time.hour(),
            start_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            duration_secs: raw.duration_secs,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year,
        });
    }

    Ok(trips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{DayFilter, MonthFilter};

    const CHICAGO_STYLE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-03-04 10:15:00,2017-03-04 10:25:00,600,Canal St,State St,Subscriber,Male,1989.0
1,2017-03-06 08:01:30,2017-03-06 08:21:30,1200,State St,Canal St,Customer,,
2,2017-06-05 23:59:59,2017-06-06 00:10:00,601,Clark St,Lake St,Subscriber,Female,1992.0
";

    const WASHINGTON_STYLE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-01 00:00:36,2017-01-01 00:06:32,356,Jefferson Dr,14th St,Registered
";

    #[test]
    fn derives_calendar_columns() {
        let trips = read_trips(CHICAGO_STYLE.as_bytes()).unwrap();
        assert_eq!(trips.len(), 3);
        assert_eq!(trips[0].month, 3);
        assert_eq!(trips[0].weekday, "saturday");
        assert_eq!(trips[0].hour, 10);
        assert_eq!(trips[2].month, 6);
        assert_eq!(trips[2].weekday, "monday");
        assert_eq!(trips[2].hour, 23);
    }

    #[test]
    fn reads_optional_demographics() {
        let trips = read_trips(CHICAGO_STYLE.as_bytes()).unwrap();
        assert_eq!(trips[0].gender.as_deref(), Some("Male"));
        assert_eq!(trips[0].birth_year, Some(1989.0));
        assert_eq!(trips[1].gender, None);
        assert_eq!(trips[1].birth_year, None);
    }

    #[test]
    fn tolerates_missing_demographic_columns() {
        let trips = read_trips(WASHINGTON_STYLE.as_bytes()).unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].gender, None);
        assert_eq!(trips[0].birth_year, None);
        assert_eq!(trips[0].user_type, "Registered");
    }

    #[test]
    fn rejects_malformed_start_times() {
        let data = "\
,Start Time,Trip Duration,Start Station,End Station,User Type
0,not-a-date,600,Canal St,State St,Subscriber
";
        assert!(read_trips(data.as_bytes()).is_err());
    }

    #[test]
    fn march_filter_keeps_only_march_rows() {
        let trips = read_trips(CHICAGO_STYLE.as_bytes()).unwrap();
        let filtered = filter::apply(trips, MonthFilter::Month(3), DayFilter::All);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|t| t.month == 3));
    }
}
