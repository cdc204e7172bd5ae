use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::data::loader;
use crate::stats;
use crate::ui::{pager, prompts};

// ---------------------------------------------------------------------------
// Session loop
// ---------------------------------------------------------------------------

/// Run filter collection, loading, reporting, and paging in a loop until
/// the user declines to restart.
pub fn run(data_dir: &Path) -> Result<()> {
    loop {
        let selection = prompts::collect_filters()?;
        let table = loader::load_city(data_dir, &selection)?;

        timed(|| stats::time::report(&table, &selection).map_err(Into::into))?;
        timed(|| stats::station::report(&table).map_err(Into::into))?;
        timed(|| Ok(stats::duration::report(&table)))?;
        timed(|| stats::user::report(&table, selection.city).map_err(Into::into))?;

        pager::run(&table)?;

        if !prompts::wants_restart()? {
            break;
        }
    }
    Ok(())
}

/// Frame one report section with its elapsed time and a separator line.
fn timed(section: impl FnOnce() -> Result<()>) -> Result<()> {
    let started = Instant::now();
    section()?;
    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    println!("{}", "-".repeat(40));
    Ok(())
}
