//! Calculation model.
//!
//! A [`Calculation`] owns the ordered rows of one payroll calculation together
//! with its work period and, once computed, its totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CalculationRowType, Row};

/// General information of a calculation, most importantly the work period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcInfo {
    /// First day of the work period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_start_date: Option<NaiveDate>,
    /// Last day of the work period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_end_date: Option<NaiveDate>,
    /// Description of the work shown on the pay slip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_description: Option<String>,
}

/// Totals of a calculated calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationTotals {
    /// Total gross salary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross_salary: Option<f64>,
}

/// The calculated results of a calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResultSummary {
    /// Calculated totals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<CalculationTotals>,
}

/// One payroll calculation.
///
/// Row order is significant: `first` and `last` queries depend on it.
///
/// # Example
///
/// ```
/// use payroll_expressions::models::{Calculation, CalculationRowType, Row};
///
/// let mut calculation = Calculation::default();
/// calculation.rows.push(Row::new(CalculationRowType::HourlySalary).with_count(8.0));
/// assert!(calculation.has_row_type(&CalculationRowType::HourlySalary));
/// assert_eq!(calculation.total_gross_salary(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    /// Identifier of the calculation in the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The rows, in insertion order.
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Work period and other general information.
    #[serde(default)]
    pub info: CalcInfo,
    /// Calculated results, present once the engine has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CalculationResultSummary>,
}

impl Calculation {
    /// Creates a calculation from its rows.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Returns true if any row has the given row type.
    pub fn has_row_type(&self, row_type: &CalculationRowType) -> bool {
        self.rows.iter().any(|r| &r.row_type == row_type)
    }

    /// The total gross salary of the calculation, or 0 when not calculated.
    pub fn total_gross_salary(&self) -> f64 {
        self.result
            .as_ref()
            .and_then(|r| r.totals.as_ref())
            .and_then(|t| t.total_gross_salary)
            .unwrap_or(0.0)
    }
}
