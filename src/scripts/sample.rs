//! Sample scripts.
//!
//! Typical customer scripts, written against the helper facade:
//!
//! - [`OvertimeScript`] - Overtime base price and compensation price
//! - [`PaidAbsenceScript`] - Hourly price of paid absence from the monthly salary
//! - [`HourlyRowScript`] - Adds a default hourly row to calculations without one
//! - [`PeriodResultScripts`] - Pay statistics, holiday accruals and holiday pay

use chrono::{NaiveDate, Utc};
use tracing::debug;

use super::{BeforeCalcScripts, ResultScripts, RowTypeScripts};
use crate::config::ScriptDefaults;
use crate::context::ScriptContext;
use crate::error::{ExpressionError, ExpressionResult};
use crate::expressions::{ExpressionHelpers, RowTypeSelector, RowsHelper};
use crate::models::{
    AVERAGE_HOURLY_PAY_KIND, Calculation, CalculationRowType, HolidayPay, HolidayYear,
    MonthlyHolidayAccrual, PayStatsCalculationResultValue, Row, RowData,
};

/// Business configuration holding the monthly salary divider.
pub const MONTHLY_DIVIDER_CONFIG: &str = "monthlyDivider";

/// Identifier of the average hourly pay statistic used for overtime.
pub const AVERAGE_HOURLY_PAY_ID: &str = "avg";

/// Overtime rows.
///
/// The base hours are priced at the employment's hourly salary. The
/// overtime compensation is a share of the higher of that price and the
/// employment's average hourly pay for the work period's pricing bucket.
#[derive(Debug, Clone, Default)]
pub struct OvertimeScript {
    defaults: ScriptDefaults,
}

impl OvertimeScript {
    /// Creates the script with the given defaults.
    pub fn new(defaults: ScriptDefaults) -> Self {
        Self { defaults }
    }
}

impl RowTypeScripts for OvertimeScript {
    fn price(
        &self,
        _row: &Row,
        _ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<f64>> {
        Ok(Some(helpers.prices.get_employment(&hourly_salary())))
    }

    fn data(
        &self,
        row: &Row,
        _ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<RowData>> {
        let Some(mut data) = row.data.clone() else {
            return Ok(None);
        };

        let standard = helpers.prices.get_employment(&hourly_salary());
        let average = employment_average_hourly_price(helpers)?;
        let price = self.defaults.overtime_compensation_rate * standard.max(average);

        let Some(first) = data.compensation_rows_mut().and_then(|rows| rows.first_mut()) else {
            return Ok(None);
        };
        first.price = Some(price);

        debug!(standard, average, price, "Overtime compensation priced");
        Ok(Some(data))
    }
}

/// Paid absence rows, priced per hour from the monthly salary.
#[derive(Debug, Clone, Default)]
pub struct PaidAbsenceScript {
    defaults: ScriptDefaults,
}

impl PaidAbsenceScript {
    /// Creates the script with the given defaults.
    pub fn new(defaults: ScriptDefaults) -> Self {
        Self { defaults }
    }
}

impl RowTypeScripts for PaidAbsenceScript {
    fn price(
        &self,
        _row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<f64>> {
        let monthly = helpers
            .prices
            .get_employment(&RowTypeSelector::from(CalculationRowType::MonthlySalary));
        if monthly == 0.0 {
            return Ok(Some(0.0));
        }

        let divider = ctx
            .config_f64(MONTHLY_DIVIDER_CONFIG)?
            .unwrap_or(self.defaults.monthly_divider);
        if divider == 0.0 {
            return Err(ExpressionError::ScriptError {
                script: "paidAbsence.price".to_string(),
                message: "monthly divider is zero".to_string(),
            });
        }

        Ok(helpers.round(monthly / divider, self.defaults.rounding_precision))
    }
}

/// Adds the default hourly salary row to calculations that have none.
#[derive(Debug, Clone, Default)]
pub struct HourlyRowScript {
    defaults: ScriptDefaults,
}

impl HourlyRowScript {
    /// Creates the script with the given defaults.
    pub fn new(defaults: ScriptDefaults) -> Self {
        Self { defaults }
    }
}

impl BeforeCalcScripts for HourlyRowScript {
    fn rows(
        &self,
        current: &[Row],
        _ctx: &ScriptContext,
        _helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<Vec<Row>>> {
        if RowsHelper::new(current).first(&hourly_salary()).is_some() {
            return Ok(None);
        }

        let hourly = &self.defaults.default_hourly_row;
        let mut rows = current.to_vec();
        rows.push(
            Row::new(CalculationRowType::HourlySalary)
                .with_count(hourly.count)
                .with_price(hourly.price),
        );
        Ok(Some(rows))
    }
}

/// Result scripts for pay statistics and holiday pay.
#[derive(Debug, Clone, Default)]
pub struct PeriodResultScripts {
    defaults: ScriptDefaults,
}

impl PeriodResultScripts {
    /// Creates the scripts with the given defaults.
    pub fn new(defaults: ScriptDefaults) -> Self {
        Self { defaults }
    }
}

impl ResultScripts for PeriodResultScripts {
    fn pay_stats(
        &self,
        result: &mut PayStatsCalculationResultValue,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<()> {
        let salary: f64 = ctx
            .calculations
            .iter()
            .map(Calculation::total_gross_salary)
            .sum();
        let working_time = self.defaults.pay_stats_working_time;
        let divisor = if working_time == 0.0 { 1.0 } else { working_time };

        result.salary = Some(salary);
        result.working_time = Some(working_time);
        result.result = helpers.round(salary / divisor, self.defaults.rounding_precision);
        result.updated_at = Some(Utc::now());
        Ok(())
    }

    fn holiday_accruals(
        &self,
        result: &mut [MonthlyHolidayAccrual],
        ctx: &ScriptContext,
        _helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<()> {
        let days = ctx
            .holiday_year
            .as_ref()
            .and_then(HolidayYear::default_accrual)
            .unwrap_or(self.defaults.default_holiday_accrual);

        for accrual in result.iter_mut() {
            accrual.days_accrued = Some(days);
        }
        Ok(())
    }

    fn holiday_pay(
        &self,
        result: &mut HolidayPay,
        _ctx: &ScriptContext,
        _helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<()> {
        result.script_pay = Some(self.defaults.holiday_script_pay);
        Ok(())
    }
}

fn hourly_salary() -> RowTypeSelector<'static> {
    RowTypeSelector::from(CalculationRowType::HourlySalary)
}

/// The employment's average hourly pay price for the work period's bucket, or 0.
fn employment_average_hourly_price(helpers: &ExpressionHelpers<'_>) -> ExpressionResult<f64> {
    let bucket = pricing_bucket(helpers)?;
    let selector = RowTypeSelector::predicate(move |entry| {
        entry.row_type() == &CalculationRowType::PayStats
            && entry.data_kind() == Some(AVERAGE_HOURLY_PAY_KIND)
            && entry.data().and_then(RowData::id) == Some(AVERAGE_HOURLY_PAY_ID)
            && entry.period_start() == Some(bucket)
    });
    Ok(helpers.prices.get_employment(&selector))
}

fn pricing_bucket(helpers: &ExpressionHelpers<'_>) -> ExpressionResult<NaiveDate> {
    let start = helpers.pricing_period_start()?;
    NaiveDate::parse_from_str(&start, "%Y-%m-%d").map_err(|e| ExpressionError::InvalidDate {
        input: start.clone(),
        message: e.to_string(),
    })
}
