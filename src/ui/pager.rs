use anyhow::Result;

use super::prompts;
use crate::data::model::{TripRecord, TripTable};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// Pure paging
// ---------------------------------------------------------------------------

/// The page starting at `start`, at most [`PAGE_SIZE`] rows. Past the end
/// of the table the slice is empty.
pub fn page(trips: &[TripRecord], start: usize) -> &[TripRecord] {
    if start >= trips.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(trips.len());
    &trips[start..end]
}

// ---------------------------------------------------------------------------
// Interactive loop
// ---------------------------------------------------------------------------

/// Page through the raw rows until the user stops or the table runs out.
pub fn run(table: &TripTable) -> Result<()> {
    let mut cursor = 0;

    loop {
        let phrasing = if cursor == 0 { "the first" } else { "the next" };
        let question =
            format!("\nDo you want to see {phrasing} {PAGE_SIZE} rows of data? Enter yes or no.");
        if !prompts::confirm(&question)? {
            break;
        }

        let slice = page(&table.trips, cursor);
        if slice.is_empty() {
            println!("\nNo more data.");
            break;
        }
        for (offset, trip) in slice.iter().enumerate() {
            print_row(cursor + offset, trip);
        }
        cursor += PAGE_SIZE;
    }

    Ok(())
}

fn print_row(index: usize, trip: &TripRecord) {
    let gender = trip.gender.as_deref().unwrap_or("-");
    let birth_year = trip
        .birth_year
        .map(|y| (y as i64).to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{index:>6}  {}  {:>6.0}s  {} -> {}  {} / {gender} / {birth_year}",
        trip.start_time, trip.duration_secs, trip.start_station, trip.end_station, trip.user_type,
    );
}
