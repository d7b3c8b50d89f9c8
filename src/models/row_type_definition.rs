//! Price-list entry model.

use serde::{Deserialize, Serialize};

use super::{CalculationRowType, DateRange, RowData};

/// An entry of a price list (salary defaults) owned by an employment or by
/// company settings.
///
/// It carries the identifying fields of a [`Row`](super::Row) so that the
/// same selectors apply, but it is a default rather than an actual
/// calculation line.
///
/// # Example
///
/// ```
/// use payroll_expressions::models::{CalculationRowType, RowTypeDefinition};
///
/// let entry = RowTypeDefinition::new(CalculationRowType::HourlySalary).with_price(22.5);
/// assert_eq!(entry.price_or_default(), 22.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowTypeDefinition {
    /// The row type this entry prices.
    pub row_type: CalculationRowType,
    /// Hierarchical type path, `"<origin>/<name>[/<kind>]"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_path: Option<String>,
    /// Default unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Default quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
    /// Period the entry applies to (used by pay statistics entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<DateRange>,
    /// Row-kind specific payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RowData>,
}

impl RowTypeDefinition {
    /// Creates an entry for the given row type with every optional field unset.
    pub fn new(row_type: impl Into<CalculationRowType>) -> Self {
        Self {
            row_type: row_type.into(),
            type_path: None,
            price: None,
            count: None,
            period: None,
            data: None,
        }
    }

    /// Sets the type path.
    pub fn with_type_path(mut self, type_path: impl Into<String>) -> Self {
        self.type_path = Some(type_path.into());
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

    /// The price, or 0 when absent.
    pub fn price_or_default(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_price_list_entry() {
        let json = r#"{ "rowType": "monthlySalary", "type": "builtIn/monthlySalary", "price": 3200 }"#;
        let entry: RowTypeDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(entry.row_type, CalculationRowType::MonthlySalary);
        assert_eq!(entry.type_path.as_deref(), Some("builtIn/monthlySalary"));
        assert_eq!(entry.price, Some(3200.0));
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let entry = RowTypeDefinition::new("bonus");
        assert_eq!(entry.price_or_default(), 0.0);
    }
}
