//! Daily aggregation and chart export use case

use crate::error::Result;
use crate::infrastructure::{ChartRenderer, WorkbookRepository};
use chrono::NaiveDate;

/// Count entries per calendar day, render the bar chart, and persist the
/// counts as the `Daily Entry Counts` sheet next to the entry table.
/// Returns the counts in ascending date order.
pub fn visualize(
    repository: &WorkbookRepository,
    chart: &ChartRenderer,
) -> Result<Vec<(NaiveDate, usize)>> {
    let logbook = repository.load()?;
    let counts: Vec<(NaiveDate, usize)> = logbook.daily_counts().into_iter().collect();

    chart.render(&counts)?;
    repository.save_with_counts(&logbook, &counts)?;

    Ok(counts)
}
