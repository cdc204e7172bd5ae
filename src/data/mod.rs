//! Data layer: core types, loading, and filtering.
//!
//! ```text
//!  chicago.csv / new_york_city.csv / washington.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse rows, derive month / weekday / hour
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  apply the month / day selections
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ TripTable │  filtered rows in original order
//!   └───────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
