//! The helper facade handed to scripts.

use super::fiscal_bucket;
use super::prices::PricesHelper;
use super::rounding;
use super::rows::RowsHelper;
use crate::context::ScriptContext;
use crate::error::ExpressionResult;
use crate::models::{CalcInfo, Calculation, CompanyAccountSettings, Employment};

/// Row queries, price lookups, rounding and pricing periods over one context.
///
/// Everything is borrowed from the context; building a facade is cheap and
/// nothing is cached between calls.
///
/// # Example
///
/// ```
/// use payroll_expressions::context::ScriptContext;
/// use payroll_expressions::expressions::ExpressionHelpers;
/// use payroll_expressions::models::{Calculation, CalculationRowType, Row};
///
/// let ctx = ScriptContext::new(Calculation::with_rows(vec![
///     Row::new(CalculationRowType::HourlySalary).with_count(40.0).with_price(20.0),
/// ]));
/// let helpers = ExpressionHelpers::new(&ctx);
///
/// assert_eq!(helpers.rows.sum(&"hourlySalary".into()), 800.0);
/// assert_eq!(helpers.prices.get(&"hourlySalary".into()), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExpressionHelpers<'a> {
    /// Queries over the calculation's rows.
    pub rows: RowsHelper<'a>,
    /// Lookups over the employment and company price lists.
    pub prices: PricesHelper<'a>,
    info: &'a CalcInfo,
}

impl<'a> ExpressionHelpers<'a> {
    /// Builds the facade over a script context.
    pub fn new(ctx: &'a ScriptContext) -> Self {
        Self::from_parts(&ctx.calculation, &ctx.employment, &ctx.settings)
    }

    /// Builds the facade from its individual inputs.
    pub fn from_parts(
        calculation: &'a Calculation,
        employment: &'a Employment,
        settings: &'a CompanyAccountSettings,
    ) -> Self {
        Self {
            rows: RowsHelper::for_calculation(calculation),
            prices: PricesHelper::new(employment, settings),
            info: &calculation.info,
        }
    }

    /// See [`rounding::round`].
    pub fn round(&self, value: f64, decimals: u32) -> Option<f64> {
        rounding::round(value, decimals)
    }

    /// See [`rounding::round_opt`].
    pub fn round_opt(&self, value: Option<f64>, decimals: Option<u32>) -> Option<f64> {
        rounding::round_opt(value, decimals)
    }

    /// Pricing bucket start for the calculation's work start date, or today
    /// when the calculation has none.
    pub fn pricing_period_start(&self) -> ExpressionResult<String> {
        let work_start = self
            .info
            .work_start_date
            .map(|date| date.format("%Y-%m-%d").to_string());
        fiscal_bucket::pricing_period_start(work_start.as_deref())
    }

    /// Pricing bucket start for an explicit `yyyy-MM-dd` date.
    pub fn pricing_period_start_for(&self, work_start_date: Option<&str>) -> ExpressionResult<String> {
        fiscal_bucket::pricing_period_start(work_start_date)
    }
}
