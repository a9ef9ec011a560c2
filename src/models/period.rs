//! Month cursor for the paginated transaction log header
//!
//! The cursor only drives the month label; it does not filter transactions.

use chrono::Datelike;
use std::fmt;

use crate::error::{TallyError, TallyResult};

/// Hungarian month names, indexed by month index
pub const MONTH_NAMES: [&str; 12] = [
    "Január",
    "Február",
    "Március",
    "Április",
    "Május",
    "Június",
    "Július",
    "Augusztus",
    "Szeptember",
    "Október",
    "November",
    "December",
];

/// A (month, year) pointer stepped one month at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodCursor {
    /// 0 = January .. 11 = December
    month_index: u32,
    year: i32,
}

impl PeriodCursor {
    /// Create a cursor; `month_index` must be in 0..=11
    pub fn new(month_index: u32, year: i32) -> TallyResult<Self> {
        if month_index > 11 {
            return Err(TallyError::Validation(format!(
                "Month index must be between 0 and 11, got {}",
                month_index
            )));
        }
        Ok(Self { month_index, year })
    }

    /// Cursor at the current local month
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            month_index: today.month0(),
            year: today.year(),
        }
    }

    /// Parse "YYYY-MM" (month 1-12)
    pub fn parse(s: &str) -> TallyResult<Self> {
        let invalid =
            || TallyError::Validation(format!("Invalid month format: {} (expected YYYY-MM)", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Self::new(month - 1, year)
    }

    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Move one month forward, rolling the year over after December
    ///
    /// Fails, leaving the cursor unchanged, past the last representable year.
    pub fn advance(&mut self) -> TallyResult<(u32, i32)> {
        self.step(1)
    }

    /// Move one month back, rolling the year back before January
    pub fn retreat(&mut self) -> TallyResult<(u32, i32)> {
        self.step(-1)
    }

    /// Advance (positive) or retreat (negative) by `months`
    pub fn step(&mut self, months: i64) -> TallyResult<(u32, i32)> {
        let out_of_range = || {
            TallyError::Validation(format!(
                "Moving {} months from {} is out of range",
                months, self
            ))
        };

        let target = (i64::from(self.year) * 12 + i64::from(self.month_index))
            .checked_add(months)
            .ok_or_else(out_of_range)?;
        let year = i32::try_from(target.div_euclid(12)).map_err(|_| out_of_range())?;

        // rem_euclid(12) is always in 0..12
        self.month_index = target.rem_euclid(12) as u32;
        self.year = year;
        Ok((self.month_index, self.year))
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month_index as usize]
    }

    /// Header text, e.g. "Aktuális hónap: December 2024"
    pub fn label(&self) -> String {
        format!("Aktuális hónap: {}", self)
    }
}

impl Default for PeriodCursor {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for PeriodCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
