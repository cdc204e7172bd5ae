use super::section;
use crate::data::model::TripTable;

// ---------------------------------------------------------------------------
// Trip duration totals
// ---------------------------------------------------------------------------

/// Total and mean trip duration in seconds. `mean_secs` is NaN for an
/// empty table; callers print it as-is.
#[derive(Debug, PartialEq)]
pub struct DurationStats {
    pub count: usize,
    pub total_secs: f64,
    pub mean_secs: f64,
}

pub fn compute(table: &TripTable) -> DurationStats {
    let count = table.len();
    let total_secs: f64 = table.trips.iter().map(|t| t.duration_secs).sum();
    DurationStats {
        count,
        total_secs,
        mean_secs: total_secs / count as f64,
    }
}

/// Print the total and mean travel time.
pub fn report(table: &TripTable) {
    section("Calculating trip duration...");
    let stats = compute(table);
    println!("Total travel time: {:.0} seconds", stats.total_secs);
    println!("Mean travel time: {:.2} seconds", stats.mean_secs);
}
