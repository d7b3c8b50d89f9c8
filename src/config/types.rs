//! Configuration types for the expression helpers.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::expressions::DEFAULT_PRECISION;
use crate::models::BizConfig;

/// Engine level settings, read from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Name of the configuration set (e.g., "default").
    pub name: String,
    /// Free text description.
    #[serde(default)]
    pub description: String,
    /// Fallback values used by the sample scripts.
    #[serde(default)]
    pub defaults: ScriptDefaults,
}

/// Fallback values used when the script context does not provide one.
///
/// Every field has a default, so a partial `defaults:` section is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScriptDefaults {
    /// Decimals used by `avg_price` and price rounding.
    pub rounding_precision: u32,
    /// Monthly salary divider when no `monthlyDivider` business config is set.
    pub monthly_divider: f64,
    /// Holiday days accrued per month when the holiday year has none.
    pub default_holiday_accrual: f64,
    /// Working hours per pay statistics period.
    pub pay_stats_working_time: f64,
    /// Share of the hourly price paid as overtime compensation.
    pub overtime_compensation_rate: f64,
    /// The hourly row added to calculations that have none.
    pub default_hourly_row: DefaultHourlyRow,
    /// Holiday pay set by the holiday pay script.
    pub holiday_script_pay: f64,
}

impl Default for ScriptDefaults {
    fn default() -> Self {
        Self {
            rounding_precision: DEFAULT_PRECISION,
            monthly_divider: 158.0,
            default_holiday_accrual: 2.5,
            pay_stats_working_time: 158.0,
            overtime_compensation_rate: 0.5,
            default_hourly_row: DefaultHourlyRow::default(),
            holiday_script_pay: 180.0,
        }
    }
}

/// Count and price of the default hourly salary row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultHourlyRow {
    /// Hours.
    pub count: f64,
    /// Hourly price.
    pub price: f64,
}

impl Default for DefaultHourlyRow {
    fn default() -> Self {
        Self {
            count: 120.0,
            price: 21.0,
        }
    }
}

/// Business configurations file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BizConfigsFile {
    /// The configuration entries, in lookup order.
    #[serde(default)]
    pub configs: Vec<BizConfig>,
}
