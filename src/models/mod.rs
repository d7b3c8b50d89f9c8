//! Core data models for the expression helpers.
//!
//! These are the values the calculation engine hands to scripts: the
//! calculation and its rows, price lists, business configuration and the
//! result objects of the result hooks.

mod audit;
mod biz_config;
mod calculation;
mod employment;
mod holiday;
mod pay_stats;
mod period;
mod row;
mod row_type_definition;

pub use audit::AuditStep;
pub use biz_config::BizConfig;
pub use calculation::{CalcInfo, Calculation, CalculationResultSummary, CalculationTotals};
pub use employment::{CompanyAccountSettings, CompanyCalcSettings, Employment, EmploymentWork};
pub use holiday::{HolidayAccrualSettings, HolidayPay, HolidayYear, MonthlyHolidayAccrual};
pub use pay_stats::{PayStatsCalculationResultValue, PayStatsTypeDefinition};
pub use period::DateRange;
pub use row::{
    AVERAGE_HOURLY_PAY_KIND, AverageHourlyPayData, CalculationRowType, CompensationRow,
    OVERTIME_KIND, OvertimeData, Row, RowData,
};
pub use row_type_definition::RowTypeDefinition;
