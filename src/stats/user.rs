use super::{mode, section, value_counts, StatsError};
use crate::data::model::{City, TripTable};

// ---------------------------------------------------------------------------
// User demographics
// ---------------------------------------------------------------------------

/// Birth-year spread. The datasets store years as floats; they are
/// truncated to whole years here.
#[derive(Debug, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Per-category counts in first-seen row order. The demographic sections
/// are `None` for cities whose datasets do not carry them.
#[derive(Debug, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

pub fn compute(table: &TripTable, city: City) -> Result<UserStats, StatsError> {
    let trips = &table.trips;

    let user_types = value_counts(trips.iter().map(|t| t.user_type.clone()));
    if user_types.is_empty() {
        return Err(StatsError::EmptyTable);
    }

    if !city.has_demographics() {
        return Ok(UserStats {
            user_types,
            genders: None,
            birth_years: None,
        });
    }

    let genders = value_counts(trips.iter().filter_map(|t| t.gender.clone()));
    if genders.is_empty() {
        return Err(StatsError::MissingColumn {
            city: city.to_string(),
            column: "Gender",
        });
    }

    let years: Vec<f64> = trips.iter().filter_map(|t| t.birth_year).collect();
    if years.is_empty() {
        return Err(StatsError::MissingColumn {
            city: city.to_string(),
            column: "Birth Year",
        });
    }
    let earliest = years.iter().copied().fold(f64::INFINITY, f64::min) as i64;
    let most_recent = years.iter().copied().fold(f64::NEG_INFINITY, f64::max) as i64;
    // Years are integral floats in the source data; counting the truncated
    // values groups them correctly.
    let (most_common, _) = mode(years.iter().map(|&y| y as i64)).ok_or(StatsError::EmptyTable)?;

    Ok(UserStats {
        user_types,
        genders: Some(genders),
        birth_years: Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
    })
}

/// Print counts per user type and, where the dataset has them, the gender
/// counts and birth-year spread.
pub fn report(table: &TripTable, city: City) -> Result<(), StatsError> {
    section("Calculating user stats...");
    let stats = compute(table, city)?;

    println!("User types:");
    for (user_type, count) in &stats.user_types {
        println!("  {user_type}: {count}");
    }

    if let Some(genders) = &stats.genders {
        println!("\nGender:");
        for (gender, count) in genders {
            println!("  {gender}: {count}");
        }
    }

    if let Some(years) = &stats.birth_years {
        println!("\nEarliest year of birth: {}", years.earliest);
        println!("Most recent year of birth: {}", years.most_recent);
        println!("Most common year of birth: {}", years.most_common);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::trip;

    fn demographic_table() -> TripTable {
        let mut trips = vec![
            trip("2017-03-06 08:00:00"),
            trip("2017-03-06 09:00:00"),
            trip("2017-03-07 10:00:00"),
        ];
        trips[0].gender = Some("Male".to_string());
        trips[0].birth_year = Some(1989.0);
        trips[1].gender = Some("Female".to_string());
        trips[1].birth_year = Some(1992.0);
        trips[2].user_type = "Customer".to_string();
        trips[2].gender = Some("Female".to_string());
        trips[2].birth_year = Some(1992.0);
        TripTable::new(trips)
    }

    #[test]
    fn counts_every_observed_category_by_name() {
        let stats = compute(&demographic_table(), City::Chicago).unwrap();
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
        assert_eq!(
            stats.genders,
            Some(vec![
                ("Male".to_string(), 1),
                ("Female".to_string(), 2)
            ])
        );
    }

    #[test]
    fn birth_years_are_truncated_to_whole_years() {
        let stats = compute(&demographic_table(), City::Chicago).unwrap();
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: 1989,
                most_recent: 1992,
                most_common: 1992,
            })
        );
    }

    #[test]
    fn washington_skips_the_demographic_sections() {
        let stats = compute(&demographic_table(), City::Washington).unwrap();
        assert!(!stats.user_types.is_empty());
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn demographics_city_without_gender_values_is_an_error() {
        let table = TripTable::new(vec![trip("2017-03-06 08:00:00")]);
        assert_eq!(
            compute(&table, City::Chicago),
            Err(StatsError::MissingColumn {
                city: "Chicago".to_string(),
                column: "Gender",
            })
        );
    }

    #[test]
    fn empty_table_is_an_error() {
        assert_eq!(
            compute(&TripTable::default(), City::Washington),
            Err(StatsError::EmptyTable)
        );
    }
}
