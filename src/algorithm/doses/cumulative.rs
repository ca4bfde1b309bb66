//! Running totals over the date-ordered global aggregation.

use crate::error::util::checked_sum;
use crate::error::{Error, Result};
use crate::models::GlobalAggregateRow;

/// Fail with `UnorderedDates` unless every date is greater than the one before
pub fn ensure_strictly_increasing<'a>(dates: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut previous: Option<&str> = None;
    for current in dates {
        if let Some(prev) = previous {
            if current <= prev {
                return Err(Error::UnorderedDates {
                    previous: prev.to_string(),
                    current: current.to_string(),
                });
            }
        }
        previous = Some(current);
    }
    Ok(())
}

/// Sort by date and replace every count with its running total
///
/// The rows are sorted right before the fold and the order is asserted, so a
/// duplicated date fails instead of corrupting the totals.
pub fn enrich_cumulative_sums(mut rows: Vec<GlobalAggregateRow>) -> Result<Vec<GlobalAggregateRow>> {
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    ensure_strictly_increasing(rows.iter().map(|row| row.date.as_str()))?;

    let mut running = [0u64; 5];
    for row in &mut rows {
        let date = row.date.clone();
        let context = move || format!("accumulating totals up to {date}");
        let counts = [
            &mut row.people_vaccinated,
            &mut row.people_fully_vaccinated,
            &mut row.people_boosted_1,
            &mut row.people_boosted_2,
            &mut row.total_vaccinations,
        ];
        for (total, count) in running.iter_mut().zip(counts) {
            *total = checked_sum(*total, *count, context.clone())?;
            *count = *total;
        }
    }

    Ok(rows)
}
