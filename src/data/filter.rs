use super::model::{City, TripRecord, DAY_NAMES, MONTH_NAMES};

// ---------------------------------------------------------------------------
// Filter selections gathered from the user
// ---------------------------------------------------------------------------

/// Month constraint: no filter, or a calendar month number (1–12) resolved
/// from the month's position in [`MONTH_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl MonthFilter {
    /// Case-insensitive parse of `"all"` or a full month name.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        if needle == "all" {
            return Some(MonthFilter::All);
        }
        MONTH_NAMES
            .iter()
            .position(|m| *m == needle)
            .map(|i| MonthFilter::Month(i as u32 + 1))
    }

    pub fn is_all(self) -> bool {
        self == MonthFilter::All
    }
}

/// Weekday constraint: no filter, or a canonical lowercase day name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(&'static str),
}

impl DayFilter {
    /// Case-insensitive parse of `"all"` or a full weekday name.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        if needle == "all" {
            return Some(DayFilter::All);
        }
        DAY_NAMES
            .iter()
            .position(|d| *d == needle)
            .map(|i| DayFilter::Day(DAY_NAMES[i]))
    }

    pub fn is_all(self) -> bool {
        self == DayFilter::All
    }
}

/// A fully resolved set of filters; nothing loads until all three fields
/// are valid.
#[derive(Debug, Clone, Copy)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

// ---------------------------------------------------------------------------
// Row filtering
// ---------------------------------------------------------------------------

/// Keep only trips passing the month and day constraints, preserving row
/// order.
pub fn apply(trips: Vec<TripRecord>, month: MonthFilter, day: DayFilter) -> Vec<TripRecord> {
    trips
        .into_iter()
        .filter(|t| match month {
            MonthFilter::All => true,
            MonthFilter::Month(m) => t.month == m,
        })
        .filter(|t| match day {
            DayFilter::All => true,
            DayFilter::Day(d) => t.weekday == d,
        })
        .collect()
}
