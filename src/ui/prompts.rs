use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::data::filter::{DayFilter, FilterSelection, MonthFilter};
use crate::data::model::City;

// ---------------------------------------------------------------------------
// Low-level line input
// ---------------------------------------------------------------------------

/// Print a prompt, flush, and read one trimmed line from stdin.
fn ask(prompt: &str) -> Result<String> {
    println!("{prompt}");
    io::stdout().flush().context("flushing stdout")?;

    let mut buffer = String::new();
    io::stdin()
        .read_line(&mut buffer)
        .context("reading from stdin")?;
    Ok(buffer.trim().to_string())
}

fn invalid(expected: &str) {
    println!("{} expected {expected}", "Invalid choice:".red());
}

// ---------------------------------------------------------------------------
// Filter collection
// ---------------------------------------------------------------------------

/// Interactively gather a full [`FilterSelection`], re-asking each question
/// until the answer matches its enumeration.
pub fn collect_filters() -> Result<FilterSelection> {
    println!("Hello! Let's explore some US bikeshare data!");

    let city = loop {
        let answer =
            ask("\nWould you like to see data for Chicago, New York City, or Washington?")?;
        match City::parse(&answer) {
            Some(city) => break city,
            None => invalid("Chicago, New York City, or Washington"),
        }
    };

    let month = loop {
        let answer = ask("\nWhich month - January through December, or \"all\"?")?;
        match MonthFilter::parse(&answer) {
            Some(month) => break month,
            None => invalid("a full month name or \"all\""),
        }
    };

    let day = loop {
        let answer = ask("\nWhich day - Monday through Sunday, or \"all\"?")?;
        match DayFilter::parse(&answer) {
            Some(day) => break day,
            None => invalid("a weekday name or \"all\""),
        }
    };

    println!("{}", "-".repeat(40));
    Ok(FilterSelection { city, month, day })
}

// ---------------------------------------------------------------------------
// Yes / no questions
// ---------------------------------------------------------------------------

/// Strict yes/no matching; anything else means "ask again".
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Ask until the user answers yes or no.
pub fn confirm(prompt: &str) -> Result<bool> {
    loop {
        let answer = ask(prompt)?;
        match parse_yes_no(&answer) {
            Some(choice) => return Ok(choice),
            None => invalid("yes or no"),
        }
    }
}

/// Restart matching for the session loop: an exact "yes" in any case
/// restarts; any other answer, typos included, ends the session.
pub fn is_restart(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Ask once whether the session should run again.
pub fn wants_restart() -> Result<bool> {
    let answer = ask("\nWould you like to restart? Enter yes or no.")?;
    Ok(is_restart(&answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_matching_is_strict() {
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no(" YES "), Some(true));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("y"), None);
        assert_eq!(parse_yes_no("nope"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn restart_requires_an_exact_yes() {
        assert!(is_restart("yes"));
        assert!(is_restart("Yes"));
        assert!(is_restart(" YES "));
        assert!(!is_restart("y"));
        assert!(!is_restart("yess"));
        assert!(!is_restart("no"));
    }
}
