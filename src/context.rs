//! The explicit context a script runs against.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{ExpressionError, ExpressionResult};
use crate::expressions::ExpressionHelpers;
use crate::models::{
    BizConfig, Calculation, CompanyAccountSettings, Employment, HolidayYear, Row,
};

/// Everything a script may read while it runs.
///
/// The context is passed explicitly to every hook; there is no ambient
/// state. Scripts never mutate it; results flow back through hook return
/// values and `&mut` result parameters.
///
/// # Example
///
/// ```
/// use payroll_expressions::context::ScriptContext;
/// use payroll_expressions::models::{BizConfig, Calculation};
///
/// let ctx = ScriptContext::new(Calculation::default())
///     .with_configs(vec![BizConfig::new("monthlyDivider", 160)]);
///
/// assert_eq!(ctx.config_f64("monthlyDivider").unwrap(), Some(160.0));
/// assert_eq!(ctx.config_f64("missing").unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptContext {
    /// The calculation being run.
    #[serde(default)]
    pub calculation: Calculation,
    /// The row under evaluation, for row hooks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<Row>,
    /// The employment relation of the calculation.
    #[serde(default)]
    pub employment: Employment,
    /// The employer's company settings.
    #[serde(default)]
    pub settings: CompanyAccountSettings,
    /// Business configuration entries visible to the script.
    #[serde(default)]
    pub configs: Vec<BizConfig>,
    /// Other calculations of the statistics period, for result hooks.
    #[serde(default)]
    pub calculations: Vec<Calculation>,
    /// The holiday year, for holiday hooks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_year: Option<HolidayYear>,
}

impl ScriptContext {
    /// Creates a context for a calculation with empty price lists and configs.
    pub fn new(calculation: Calculation) -> Self {
        Self {
            calculation,
            ..Self::default()
        }
    }

    /// Sets the row under evaluation.
    pub fn with_row(mut self, row: Row) -> Self {
        self.row = Some(row);
        self
    }

    /// Sets the employment.
    pub fn with_employment(mut self, employment: Employment) -> Self {
        self.employment = employment;
        self
    }

    /// Sets the company settings.
    pub fn with_settings(mut self, settings: CompanyAccountSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the business configuration entries.
    pub fn with_configs(mut self, configs: Vec<BizConfig>) -> Self {
        self.configs = configs;
        self
    }

    /// Sets the calculations of the statistics period.
    pub fn with_calculations(mut self, calculations: Vec<Calculation>) -> Self {
        self.calculations = calculations;
        self
    }

    /// Sets the holiday year.
    pub fn with_holiday_year(mut self, holiday_year: HolidayYear) -> Self {
        self.holiday_year = Some(holiday_year);
        self
    }

    /// The helper facade over this context.
    pub fn helpers(&self) -> ExpressionHelpers<'_> {
        ExpressionHelpers::new(self)
    }

    /// The first business configuration entry with the given name.
    pub fn config(&self, name: &str) -> Option<&BizConfig> {
        self.configs.iter().find(|c| c.name == name)
    }

    /// A numeric business configuration value.
    ///
    /// Missing entries and `null` values read as `None`. Numbers and numeric
    /// strings are accepted; anything else is a
    /// [`ConfigValueType`](ExpressionError::ConfigValueType) error.
    pub fn config_f64(&self, name: &str) -> ExpressionResult<Option<f64>> {
        let Some(config) = self.config(name) else {
            trace!(name, "Business configuration not set");
            return Ok(None);
        };

        let value = match &config.data {
            Value::Null => return Ok(None),
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };

        value
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| ExpressionError::ConfigValueType {
                name: name.to_string(),
                expected: "number".to_string(),
            })
    }

    /// Like [`config_f64`](Self::config_f64), but a missing entry is a
    /// [`ConfigValueNotFound`](ExpressionError::ConfigValueNotFound) error.
    pub fn require_config_f64(&self, name: &str) -> ExpressionResult<f64> {
        self.config_f64(name)?
            .ok_or_else(|| ExpressionError::ConfigValueNotFound {
                name: name.to_string(),
            })
    }
}
