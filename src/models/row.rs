//! Calculation row model and related types.
//!
//! This module defines [`Row`], the line item of a payroll calculation, its
//! [`CalculationRowType`] category and the kind-keyed [`RowData`] payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ExpressionError;

use super::DateRange;

/// The `data.kind` of rows carrying period-average hourly pay statistics.
pub const AVERAGE_HOURLY_PAY_KIND: &str = "averageHourlyPay";

/// The `data.kind` of overtime rows carrying compensation rows.
pub const OVERTIME_KIND: &str = "overtime";

/// The category of a calculation row.
///
/// Known categories have their own variant; anything else the engine sends is
/// kept verbatim in [`CalculationRowType::Other`]. Comparison against plain
/// strings uses the wire spelling, so `HourlySalary == "hourlySalary"`.
///
/// # Example
///
/// ```
/// use payroll_expressions::models::CalculationRowType;
///
/// let row_type = CalculationRowType::from("hourlySalary");
/// assert_eq!(row_type, CalculationRowType::HourlySalary);
/// assert!(row_type == "hourlySalary");
/// assert_eq!(CalculationRowType::from("bonus").as_str(), "bonus");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CalculationRowType {
    /// Hourly salary (`hourlySalary`).
    HourlySalary,
    /// Monthly salary (`monthlySalary`).
    MonthlySalary,
    /// Lump-sum salary (`salary`).
    Salary,
    /// Overtime compensation (`overtime`).
    Overtime,
    /// Paid absence (`absencePaid`).
    AbsencePaid,
    /// Phone benefit (`phoneBenefit`).
    PhoneBenefit,
    /// Meal benefit (`mealBenefit`).
    MealBenefit,
    /// Pre-computed pay statistics (`payStats`).
    PayStats,
    /// Any other row type, kept as sent.
    Other(String),
}

impl CalculationRowType {
    /// Returns the wire spelling of the row type.
    pub fn as_str(&self) -> &str {
        match self {
            CalculationRowType::HourlySalary => "hourlySalary",
            CalculationRowType::MonthlySalary => "monthlySalary",
            CalculationRowType::Salary => "salary",
            CalculationRowType::Overtime => "overtime",
            CalculationRowType::AbsencePaid => "absencePaid",
            CalculationRowType::PhoneBenefit => "phoneBenefit",
            CalculationRowType::MealBenefit => "mealBenefit",
            CalculationRowType::PayStats => "payStats",
            CalculationRowType::Other(value) => value,
        }
    }

    /// Returns true for an empty row type, which no selector ever matches.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<&str> for CalculationRowType {
    fn from(value: &str) -> Self {
        match value {
            "hourlySalary" => CalculationRowType::HourlySalary,
            "monthlySalary" => CalculationRowType::MonthlySalary,
            "salary" => CalculationRowType::Salary,
            "overtime" => CalculationRowType::Overtime,
            "absencePaid" => CalculationRowType::AbsencePaid,
            "phoneBenefit" => CalculationRowType::PhoneBenefit,
            "mealBenefit" => CalculationRowType::MealBenefit,
            "payStats" => CalculationRowType::PayStats,
            other => CalculationRowType::Other(other.to_string()),
        }
    }
}

impl From<String> for CalculationRowType {
    fn from(value: String) -> Self {
        CalculationRowType::from(value.as_str())
    }
}

impl From<CalculationRowType> for String {
    fn from(value: CalculationRowType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CalculationRowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for CalculationRowType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CalculationRowType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A compensation line nested in overtime row data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationRow {
    /// The row type the compensation is paid as.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_type: Option<CalculationRowType>,
    /// Quantity, typically hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
    /// Unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Free text shown on reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Payload of `averageHourlyPay` rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageHourlyPayData {
    /// Identifier of the statistic (e.g. "avg").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `overtime` rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeData {
    /// The compensation lines paid for the overtime.
    #[serde(default)]
    pub compensation_rows: Vec<CompensationRow>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Row-kind specific payload, keyed by its `kind` field on the wire.
///
/// Known kinds decode into typed payloads. Unknown or missing kinds are kept
/// as the raw JSON object so nothing the engine sends is lost.
///
/// # Example
///
/// ```
/// use payroll_expressions::models::RowData;
///
/// let data: RowData = serde_json::from_str(r#"{"kind": "averageHourlyPay", "id": "avg"}"#).unwrap();
/// assert_eq!(data.kind(), Some("averageHourlyPay"));
/// assert_eq!(data.id(), Some("avg"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub enum RowData {
    /// `kind: "averageHourlyPay"`.
    AverageHourlyPay(AverageHourlyPayData),
    /// `kind: "overtime"`.
    Overtime(OvertimeData),
    /// Any other payload, including payloads without a kind.
    Other(Map<String, Value>),
}

impl RowData {
    /// Returns the declared kind of the payload.
    pub fn kind(&self) -> Option<&str> {
        match self {
            RowData::AverageHourlyPay(_) => Some(AVERAGE_HOURLY_PAY_KIND),
            RowData::Overtime(_) => Some(OVERTIME_KIND),
            RowData::Other(map) => map.get("kind").and_then(Value::as_str),
        }
    }

    /// Returns the `id` field of the payload, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            RowData::AverageHourlyPay(data) => data.id.as_deref(),
            RowData::Overtime(data) => data.extra.get("id").and_then(Value::as_str),
            RowData::Other(map) => map.get("id").and_then(Value::as_str),
        }
    }

    /// Returns the compensation rows of an overtime payload for editing.
    pub fn compensation_rows_mut(&mut self) -> Option<&mut Vec<CompensationRow>> {
        match self {
            RowData::Overtime(data) => Some(&mut data.compensation_rows),
            _ => None,
        }
    }
}

impl TryFrom<Map<String, Value>> for RowData {
    type Error = ExpressionError;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let kind = map.get("kind").and_then(Value::as_str).map(str::to_string);
        match kind.as_deref() {
            Some(AVERAGE_HOURLY_PAY_KIND) => {
                map.remove("kind");
                decode_payload(AVERAGE_HOURLY_PAY_KIND, map).map(RowData::AverageHourlyPay)
            }
            Some(OVERTIME_KIND) => {
                map.remove("kind");
                decode_payload(OVERTIME_KIND, map).map(RowData::Overtime)
            }
            _ => Ok(RowData::Other(map)),
        }
    }
}

impl From<RowData> for Map<String, Value> {
    fn from(data: RowData) -> Self {
        match data {
            RowData::AverageHourlyPay(payload) => {
                let mut map = payload.extra;
                if let Some(id) = payload.id {
                    map.insert("id".to_string(), Value::String(id));
                }
                map.insert("kind".to_string(), Value::from(AVERAGE_HOURLY_PAY_KIND));
                map
            }
            RowData::Overtime(payload) => {
                let mut map = payload.extra;
                map.insert(
                    "compensationRows".to_string(),
                    serde_json::json!(payload.compensation_rows),
                );
                map.insert("kind".to_string(), Value::from(OVERTIME_KIND));
                map
            }
            RowData::Other(map) => map,
        }
    }
}

fn decode_payload<T: serde::de::DeserializeOwned>(
    kind: &str,
    map: Map<String, Value>,
) -> Result<T, ExpressionError> {
    serde_json::from_value(Value::Object(map)).map_err(|e| ExpressionError::InvalidRowData {
        kind: kind.to_string(),
        message: e.to_string(),
    })
}

/// One line item of a payroll calculation.
///
/// `count` defaults to 1 and `price` to 0 when absent; the helpers never treat
/// a missing value as an error.
///
/// # Example
///
/// ```
/// use payroll_expressions::models::{CalculationRowType, Row};
///
/// let row = Row::new(CalculationRowType::HourlySalary)
///     .with_type_path("builtIn/hourlySalary")
///     .with_count(40.0)
///     .with_price(20.0);
/// assert_eq!(row.total(), 800.0);
/// assert_eq!(Row::new(CalculationRowType::PhoneBenefit).count_or_default(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// The category of the row.
    pub row_type: CalculationRowType,
    /// Hierarchical type path, `"<origin>/<name>[/<kind>]"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_path: Option<String>,
    /// Quantity (hours, days, pieces).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
    /// Unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Description text shown on reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Period if different from the period of the calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<DateRange>,
    /// Row-kind specific payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RowData>,
}

impl Row {
    /// Creates a row of the given type with every optional field unset.
    pub fn new(row_type: impl Into<CalculationRowType>) -> Self {
        Self {
            row_type: row_type.into(),
            type_path: None,
            count: None,
            price: None,
            message: None,
            period: None,
            data: None,
        }
    }

    /// Sets the type path.
    pub fn with_type_path(mut self, type_path: impl Into<String>) -> Self {
        self.type_path = Some(type_path.into());
        self
    }

    /// Sets the count.
    pub fn with_count(mut self, count: f64) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the period.
    pub fn with_period(mut self, period: DateRange) -> Self {
        self.period = Some(period);
        self
    }

    /// Sets the data payload.
    pub fn with_data(mut self, data: RowData) -> Self {
        self.data = Some(data);
        self
    }

    /// The count, or 1 when absent.
    pub fn count_or_default(&self) -> f64 {
        self.count.unwrap_or(1.0)
    }

    /// The price, or 0 when absent.
    pub fn price_or_default(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// `price × count` with the defaults applied.
    pub fn total(&self) -> f64 {
        self.price_or_default() * self.count_or_default()
    }

    /// The `data.kind` of the row, if any.
    pub fn data_kind(&self) -> Option<&str> {
        self.data.as_ref().and_then(RowData::kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_row_type_from_known_string() {
        assert_eq!(
            CalculationRowType::from("hourlySalary"),
            CalculationRowType::HourlySalary
        );
        assert_eq!(
            CalculationRowType::from("payStats"),
            CalculationRowType::PayStats
        );
    }

    #[test]
    fn test_row_type_keeps_unknown_string() {
        let row_type = CalculationRowType::from("eveningAllowance");
        assert_eq!(
            row_type,
            CalculationRowType::Other("eveningAllowance".to_string())
        );
        assert_eq!(row_type.as_str(), "eveningAllowance");
    }

    #[test]
    fn test_row_type_compares_with_str() {
        assert!(CalculationRowType::HourlySalary == "hourlySalary");
        assert!(CalculationRowType::HourlySalary != "monthlySalary");
    }

    #[test]
    fn test_row_type_serialization() {
        assert_eq!(
            serde_json::to_string(&CalculationRowType::PhoneBenefit).unwrap(),
            "\"phoneBenefit\""
        );
        let parsed: CalculationRowType = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(parsed.as_str(), "custom");
    }

    #[test]
    fn test_row_defaults() {
        let row = Row::new(CalculationRowType::PhoneBenefit);
        assert_eq!(row.count_or_default(), 1.0);
        assert_eq!(row.price_or_default(), 0.0);
        assert_eq!(row.total(), 0.0);
    }

    #[test]
    fn test_row_deserialization() {
        let json = r#"{
            "rowType": "hourlySalary",
            "type": "builtIn/hourlySalary",
            "count": 40,
            "price": 20.5,
            "period": { "start": "2024-01-01", "end": "2024-01-31" }
        }"#;

        let row: Row = serde_json::from_str(json).unwrap();
        assert_eq!(row.row_type, CalculationRowType::HourlySalary);
        assert_eq!(row.type_path.as_deref(), Some("builtIn/hourlySalary"));
        assert_eq!(row.count, Some(40.0));
        assert_eq!(row.price, Some(20.5));
        assert_eq!(
            row.period.unwrap().start,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert!(row.data.is_none());
    }

    #[test]
    fn test_row_serialization_skips_missing_fields() {
        let row = Row::new(CalculationRowType::HourlySalary).with_count(8.0);
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"rowType\":\"hourlySalary\""));
        assert!(json.contains("\"count\":8.0"));
        assert!(!json.contains("price"));
        assert!(!json.contains("\"type\""));
    }

    #[test]
    fn test_average_hourly_pay_data_decodes() {
        let json = r#"{ "kind": "averageHourlyPay", "id": "avg", "source": "payStats" }"#;
        let data: RowData = serde_json::from_str(json).unwrap();

        match &data {
            RowData::AverageHourlyPay(payload) => {
                assert_eq!(payload.id.as_deref(), Some("avg"));
                assert_eq!(payload.extra["source"], "payStats");
                assert!(!payload.extra.contains_key("kind"));
            }
            other => panic!("Expected AverageHourlyPay, got {:?}", other),
        }
        assert_eq!(data.kind(), Some(AVERAGE_HOURLY_PAY_KIND));
    }

    #[test]
    fn test_overtime_data_decodes_compensation_rows() {
        let json = r#"{
            "kind": "overtime",
            "compensationRows": [ { "rowType": "hourlySalary", "count": 2, "price": 10 } ]
        }"#;
        let mut data: RowData = serde_json::from_str(json).unwrap();

        let rows = data.compensation_rows_mut().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, Some(2.0));
        rows[0].price = Some(12.5);

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["kind"], "overtime");
        assert_eq!(value["compensationRows"][0]["price"], 12.5);
    }

    #[test]
    fn test_unknown_kind_is_kept_verbatim() {
        let json = r#"{ "kind": "mileage", "km": 42 }"#;
        let data: RowData = serde_json::from_str(json).unwrap();

        assert_eq!(data.kind(), Some("mileage"));
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["km"], 42);
        assert_eq!(value["kind"], "mileage");
    }

    #[test]
    fn test_payload_without_kind_is_other() {
        let data: RowData = serde_json::from_str(r#"{ "note": "x" }"#).unwrap();
        assert_eq!(data.kind(), None);
        assert!(matches!(data, RowData::Other(_)));
    }

    #[test]
    fn test_known_kind_with_bad_payload_fails() {
        let json = r#"{ "kind": "overtime", "compensationRows": "nope" }"#;
        let result: Result<RowData, _> = serde_json::from_str(json);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Invalid row data of kind 'overtime'"));
    }
}
