//! Pay statistics result model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Settings of a pay statistics type, e.g. average hourly pay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayStatsTypeDefinition {
    /// The kind of statistic (e.g. "averageHourlyPay").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Result data and rules of one pay statistics calculation.
///
/// The engine pre-populates `type`, `start` and `end`; the script fills in
/// the calculated fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayStatsCalculationResultValue {
    /// Settings for the type of the pay statistics.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub stats_type: Option<PayStatsTypeDefinition>,
    /// Start date (inclusive) of the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// End date (inclusive) of the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    /// Total salary counted into the statistic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    /// Total working time counted into the statistic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_time: Option<f64>,
    /// The statistic itself, e.g. average hourly pay for the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    /// Last time the result was updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
