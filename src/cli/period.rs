//! Period CLI command
//!
//! Prints the month header label. The CLI keeps no cursor state between
//! runs, so navigation is expressed as a starting month plus a step.

use crate::error::TallyResult;
use crate::models::PeriodCursor;

/// Resolve the cursor for the given starting month and step
pub fn resolve_period(
    month: Option<&str>,
    next: Option<u32>,
    prev: Option<u32>,
) -> TallyResult<PeriodCursor> {
    let mut cursor = match month {
        Some(month) => PeriodCursor::parse(month)?,
        None => PeriodCursor::current(),
    };

    let months = i64::from(next.unwrap_or(0)) - i64::from(prev.unwrap_or(0));
    cursor.step(months)?;
    Ok(cursor)
}

pub fn handle_period_command(
    month: Option<String>,
    next: Option<u32>,
    prev: Option<u32>,
) -> TallyResult<()> {
    let cursor = resolve_period(month.as_deref(), next, prev)?;
    println!("{}", cursor.label());
    Ok(())
}
