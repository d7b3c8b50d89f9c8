//! Row queries and aggregates over a calculation.

use tracing::debug;

use super::rounding::{self, DEFAULT_PRECISION};
use super::selector::RowTypeSelector;
use crate::models::{Calculation, Row};

/// Read-only queries over the rows of one calculation.
///
/// Rows are visited in calculation order. Missing counts read as 1 and
/// missing prices as 0, so a row with neither contributes 1 to counts and
/// 0 to sums.
///
/// # Example
///
/// ```
/// use payroll_expressions::expressions::RowsHelper;
/// use payroll_expressions::models::{CalculationRowType, Row};
///
/// let rows = vec![
///     Row::new(CalculationRowType::HourlySalary).with_count(40.0).with_price(20.0),
///     Row::new(CalculationRowType::HourlySalary).with_count(80.0).with_price(37.5),
/// ];
/// let helper = RowsHelper::new(&rows);
///
/// assert_eq!(helper.sum(&"hourlySalary".into()), 3800.0);
/// assert_eq!(helper.count(&"hourlySalary".into()), 120.0);
/// assert_eq!(helper.avg_price(&"hourlySalary".into(), 2), Some(31.67));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RowsHelper<'a> {
    rows: &'a [Row],
}

impl<'a> RowsHelper<'a> {
    /// Creates a helper over the given rows.
    pub fn new(rows: &'a [Row]) -> Self {
        Self { rows }
    }

    /// Creates a helper over the rows of a calculation.
    pub fn for_calculation(calculation: &'a Calculation) -> Self {
        Self::new(&calculation.rows)
    }

    /// All rows matching the selector, in calculation order.
    pub fn get(&self, selector: &RowTypeSelector<'_>) -> Vec<&'a Row> {
        self.rows
            .iter()
            .filter(|row| selector.matches_row(row))
            .collect()
    }

    /// The first matching row.
    pub fn first(&self, selector: &RowTypeSelector<'_>) -> Option<&'a Row> {
        self.rows.iter().find(|row| selector.matches_row(row))
    }

    /// The last matching row.
    pub fn last(&self, selector: &RowTypeSelector<'_>) -> Option<&'a Row> {
        self.rows.iter().rev().find(|row| selector.matches_row(row))
    }

    /// Sum of `count * price` over the matching rows. 0 when nothing matches.
    pub fn sum(&self, selector: &RowTypeSelector<'_>) -> f64 {
        self.get(selector).into_iter().map(Row::total).sum()
    }

    /// Sum of counts over the matching rows. 0 when nothing matches.
    pub fn count(&self, selector: &RowTypeSelector<'_>) -> f64 {
        self.get(selector)
            .into_iter()
            .map(Row::count_or_default)
            .sum()
    }

    /// Count-weighted average price, `sum / count`, rounded.
    ///
    /// Returns `None` when the average is undefined: nothing matched, or the
    /// matched counts add up to zero.
    pub fn avg_price(&self, selector: &RowTypeSelector<'_>, precision: u32) -> Option<f64> {
        let matched = self.get(selector);
        let sum: f64 = matched.iter().map(|row| row.total()).sum();
        let count: f64 = matched.iter().map(|row| row.count_or_default()).sum();

        let average = rounding::round(sum / count, precision);
        if average.is_none() {
            debug!(
                selector = %selector,
                matched = matched.len(),
                count,
                "Average price undefined"
            );
        }
        average
    }

    /// [`avg_price`](Self::avg_price) at the default precision of 2 decimals.
    pub fn avg_price_default(&self, selector: &RowTypeSelector<'_>) -> Option<f64> {
        self.avg_price(selector, DEFAULT_PRECISION)
    }

    /// Lowest price among the matching rows. 0 when nothing matches.
    pub fn min_price(&self, selector: &RowTypeSelector<'_>) -> f64 {
        self.get(selector)
            .into_iter()
            .map(Row::price_or_default)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Highest price among the matching rows, never below 0.
    ///
    /// Unlike [`min_price`](Self::min_price) the maximum starts from 0, so
    /// matches with only negative prices give 0.
    pub fn max_price(&self, selector: &RowTypeSelector<'_>) -> f64 {
        self.get(selector)
            .into_iter()
            .map(Row::price_or_default)
            .fold(0.0, f64::max)
    }

    /// Shorthand for [`round`](rounding::round).
    pub fn round(&self, value: f64, decimals: u32) -> Option<f64> {
        rounding::round(value, decimals)
    }
}
