//! Holiday year, accrual and holiday pay models.
//!
//! These are the result objects of the holiday related script hooks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accrual rules of a holiday year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayAccrualSettings {
    /// Holiday days accrued per full month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_accrual: Option<f64>,
}

/// The holiday year context of a calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayYear {
    /// The holiday year (e.g. 2024 for the year starting 2024-04-01).
    #[serde(default)]
    pub year: i32,
    /// Accrual rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accrual: Option<HolidayAccrualSettings>,
}

impl HolidayYear {
    /// The default monthly accrual, if configured.
    pub fn default_accrual(&self) -> Option<f64> {
        self.accrual.as_ref().and_then(|a| a.default_accrual)
    }
}

/// Holiday days accrued in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyHolidayAccrual {
    /// First day of the month.
    pub month: NaiveDate,
    /// Days accrued for the month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_accrued: Option<f64>,
}

/// The holiday pay of a holiday year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayPay {
    /// The holiday year the pay belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Pay set by a script, overriding the system calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_pay: Option<f64>,
}
