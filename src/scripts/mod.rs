//! Script extension points.
//!
//! Scripts customise a calculation by implementing the hooks of these
//! traits. Every hook is optional: the default implementations return
//! `Ok(None)` (keep the engine's value) or do nothing.
//!
//! Hooks receive the [`ScriptContext`] and an [`ExpressionHelpers`] facade
//! over it. They never mutate the context; a changed value is returned, and
//! result hooks fill in the `&mut` result object they are handed.
//!
//! - [`RowTypeScripts`] - Per row type: price, count, data and other fields
//! - [`BeforeCalcScripts`] - Before the calculation: period and rows
//! - [`AfterCalcScripts`] - After the calculation: accruals and info
//! - [`ResultScripts`] - Result objects: pay statistics and holiday pay
//! - [`sample`] - Sample implementations

pub mod sample;

use chrono::NaiveDate;

use crate::context::ScriptContext;
use crate::error::ExpressionResult;
use crate::expressions::ExpressionHelpers;
use crate::models::{
    CalcInfo, DateRange, HolidayPay, MonthlyHolidayAccrual, PayStatsCalculationResultValue, Row,
    RowData,
};

/// Hooks for rows of one row type.
///
/// Each hook sees the row as the engine has it and returns a replacement
/// value, or `None` to keep the current one.
#[allow(unused_variables)]
pub trait RowTypeScripts {
    /// Unit price of the row.
    fn price(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<f64>> {
        Ok(None)
    }

    /// Quantity of the row.
    fn count(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<f64>> {
        Ok(None)
    }

    /// Message shown on the pay slip.
    fn message(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<String>> {
        Ok(None)
    }

    /// Unit of the quantity (e.g. "hours").
    fn unit(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<String>> {
        Ok(None)
    }

    /// Identifier of the row in the source system.
    fn source_id(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<String>> {
        Ok(None)
    }

    /// Period of the row.
    fn period(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<DateRange>> {
        Ok(None)
    }

    /// Start date of the row's period.
    fn period_start(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<NaiveDate>> {
        Ok(None)
    }

    /// End date of the row's period.
    fn period_end(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<NaiveDate>> {
        Ok(None)
    }

    /// Number of days in the row's period.
    fn period_days_count(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<f64>> {
        Ok(None)
    }

    /// Individual days of the row's period.
    fn period_days(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<Vec<NaiveDate>>> {
        Ok(None)
    }

    /// Row-kind specific payload.
    fn data(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<RowData>> {
        Ok(None)
    }

    /// Kind of the row's payload.
    fn kind(
        &self,
        row: &Row,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<String>> {
        Ok(None)
    }
}

/// Hooks run before the calculation.
#[allow(unused_variables)]
pub trait BeforeCalcScripts {
    /// Work period of the calculation.
    fn period(
        &self,
        current: &DateRange,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<DateRange>> {
        Ok(None)
    }

    /// Rows of the calculation.
    fn rows(
        &self,
        current: &[Row],
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<Vec<Row>>> {
        Ok(None)
    }
}

/// Hooks run after the calculation.
#[allow(unused_variables)]
pub trait AfterCalcScripts {
    /// Holiday accruals of the calculation.
    fn accruals(
        &self,
        current: &[MonthlyHolidayAccrual],
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<Vec<MonthlyHolidayAccrual>>> {
        Ok(None)
    }

    /// General information of the calculation.
    fn info(
        &self,
        current: &CalcInfo,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<Option<CalcInfo>> {
        Ok(None)
    }
}

/// Hooks that fill in result objects prepared by the engine.
#[allow(unused_variables)]
pub trait ResultScripts {
    /// Pay statistics for the calculations in `ctx.calculations`.
    fn pay_stats(
        &self,
        result: &mut PayStatsCalculationResultValue,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<()> {
        Ok(())
    }

    /// Holiday accruals, one entry per calendar month.
    fn holiday_accruals(
        &self,
        result: &mut [MonthlyHolidayAccrual],
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<()> {
        Ok(())
    }

    /// Holiday pay of the holiday year.
    fn holiday_pay(
        &self,
        result: &mut HolidayPay,
        ctx: &ScriptContext,
        helpers: &ExpressionHelpers<'_>,
    ) -> ExpressionResult<()> {
        Ok(())
    }
}
