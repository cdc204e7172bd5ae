use super::{mode, section, StatsError};
use crate::data::model::TripTable;

// ---------------------------------------------------------------------------
// Most popular stations and trip
// ---------------------------------------------------------------------------

/// Most used start/end stations and the most frequent (start, end) pair,
/// all under the crate-wide first-seen tie-break.
#[derive(Debug, PartialEq, Eq)]
pub struct StationStats {
    pub start: Option<(String, usize)>,
    pub end: Option<(String, usize)>,
    pub trip: Option<((String, String), usize)>,
}

pub fn compute(table: &TripTable) -> StationStats {
    let trips = &table.trips;
    StationStats {
        start: mode(trips.iter().map(|t| t.start_station.clone())),
        end: mode(trips.iter().map(|t| t.end_station.clone())),
        trip: mode(
            trips
                .iter()
                .map(|t| (t.start_station.clone(), t.end_station.clone())),
        ),
    }
}

/// Print the most common start station, end station, and trip.
pub fn report(table: &TripTable) -> Result<(), StatsError> {
    section("Calculating the most popular stations and trip...");
    let stats = compute(table);

    let (start, _) = stats.start.ok_or(StatsError::EmptyTable)?;
    let (end, _) = stats.end.ok_or(StatsError::EmptyTable)?;
    let ((from, to), _) = stats.trip.ok_or(StatsError::EmptyTable)?;

    println!("Most common start station: {start}");
    println!("Most common end station: {end}");
    println!("Most common trip: from '{from}' to '{to}'");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::trip_between;

    #[test]
    fn finds_the_busiest_stations() {
        let table = TripTable::new(vec![
            trip_between("2017-03-06 08:00:00", "Canal St", "State St"),
            trip_between("2017-03-06 09:00:00", "Canal St", "Lake St"),
            trip_between("2017-03-07 10:00:00", "Clark St", "Lake St"),
        ]);
        let stats = compute(&table);
        assert_eq!(stats.start, Some(("Canal St".to_string(), 2)));
        assert_eq!(stats.end, Some(("Lake St".to_string(), 2)));
    }

    #[test]
    fn trip_pair_is_grouped_independently_of_its_endpoints() {
        // "Canal St" dominates both endpoint modes, but the most frequent
        // pair is a different trip entirely.
        let table = TripTable::new(vec![
            trip_between("2017-03-06 08:00:00", "Canal St", "State St"),
            trip_between("2017-03-06 09:00:00", "Canal St", "Lake St"),
            trip_between("2017-03-07 10:00:00", "Clark St", "Canal St"),
            trip_between("2017-03-07 11:00:00", "Clark St", "Canal St"),
        ]);
        let stats = compute(&table);
        assert_eq!(
            stats.trip,
            Some((("Clark St".to_string(), "Canal St".to_string()), 2))
        );
    }

    #[test]
    fn pair_ties_resolve_to_the_first_seen_pair() {
        let table = TripTable::new(vec![
            trip_between("2017-03-06 08:00:00", "State St", "Lake St"),
            trip_between("2017-03-06 09:00:00", "Canal St", "Clark St"),
        ]);
        let stats = compute(&table);
        assert_eq!(
            stats.trip,
            Some((("State St".to_string(), "Lake St".to_string()), 1))
        );
    }

    #[test]
    fn empty_table_reports_an_error() {
        assert_eq!(report(&TripTable::default()), Err(StatsError::EmptyTable));
    }
}
