//! Statistics passes over the filtered table.
//!
//! Every reporter is a read-only pass split into a `compute` function
//! producing a plain struct and a `report` function printing it.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::collections::HashMap;
use std::hash::Hash;

use colored::Colorize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures surfaced by the reporters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Modes are undefined over an empty table.
    #[error("no trips match the current filters")]
    EmptyTable,
    /// A demographics city produced no values for an expected column.
    #[error("{city} dataset has no usable '{column}' column")]
    MissingColumn { city: String, column: &'static str },
}

// ---------------------------------------------------------------------------
// Frequency helpers
// ---------------------------------------------------------------------------

/// Occurrence counts per distinct value, in first-seen order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for v in values {
        match index.get(&v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }
    counts
}

/// Most frequent value and its count. Ties resolve to the value seen
/// first, so the result is deterministic for a fixed row order.
pub fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in value_counts(values) {
        match &best {
            Some((_, top)) if *top >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Print the banner every report section starts with.
pub(crate) fn section(title: &str) {
    println!("\n{}\n", title.bold().cyan());
}

/// Uppercase the first letter for display (`"march"` → `"March"`).
pub(crate) fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
