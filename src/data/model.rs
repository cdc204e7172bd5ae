use std::fmt;

use chrono::NaiveDateTime;

/// Lowercase month names; a month's number is its position here plus one.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Lowercase weekday names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

// ---------------------------------------------------------------------------
// City – the three supported datasets
// ---------------------------------------------------------------------------

/// One of the three cities with a backing dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Case-insensitive lookup against the fixed city list.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    /// File name of the city's dataset.
    pub fn data_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the dataset carries the `Gender` / `Birth Year` columns.
    /// The Washington export does not.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// TripRecord – one row of a city dataset
// ---------------------------------------------------------------------------

/// A single trip (one row of the source CSV) plus its derived columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Trip duration in seconds.
    pub duration_secs: f64,
    pub user_type: String,
    /// Absent from the Washington dataset.
    pub gender: Option<String>,
    /// Stored as a float in the source files (e.g. `1992.0`).
    pub birth_year: Option<f64>,
    /// Derived at load: calendar month of `start_time`, 1–12.
    pub month: u32,
    /// Derived at load: lowercase weekday name of `start_time`.
    pub weekday: &'static str,
    /// Derived at load: hour of day of `start_time`, 0–23.
    pub hour: u32,
}

// ---------------------------------------------------------------------------
// TripTable – the filtered dataset for one session
// ---------------------------------------------------------------------------

/// The loaded and already filtered trips, in original row order.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub trips: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(trips: Vec<TripRecord>) -> Self {
        Self { trips }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
