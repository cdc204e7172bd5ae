use super::{mode, section, title_case, StatsError};
use crate::data::filter::FilterSelection;
use crate::data::model::{TripTable, MONTH_NAMES};

// ---------------------------------------------------------------------------
// Most frequent times of travel
// ---------------------------------------------------------------------------

/// Modes of the derived calendar columns. Month and weekday are only
/// computed when the corresponding filter was "all"; a filtered column has
/// a single value by construction.
#[derive(Debug, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Option<(u32, usize)>,
    pub weekday: Option<(&'static str, usize)>,
    pub hour: Option<(u32, usize)>,
}

pub fn compute(table: &TripTable, selection: &FilterSelection) -> TimeStats {
    let trips = &table.trips;
    TimeStats {
        month: if selection.month.is_all() {
            mode(trips.iter().map(|t| t.month))
        } else {
            None
        },
        weekday: if selection.day.is_all() {
            mode(trips.iter().map(|t| t.weekday))
        } else {
            None
        },
        hour: mode(trips.iter().map(|t| t.hour)),
    }
}

/// Print the most frequent month, weekday, and start hour.
pub fn report(table: &TripTable, selection: &FilterSelection) -> Result<(), StatsError> {
    section("Calculating the most frequent times of travel...");
    let stats = compute(table, selection);

    if let Some((month, _)) = stats.month {
        println!(
            "Most common month: {}",
            title_case(MONTH_NAMES[month as usize - 1])
        );
    }
    if let Some((weekday, _)) = stats.weekday {
        println!("Most common day: {}", title_case(weekday));
    }
    let (hour, _) = stats.hour.ok_or(StatsError::EmptyTable)?;
    println!("Most common start hour: {hour}");

    Ok(())
}
