//! Business configuration entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named customer or employment specific business configuration value.
///
/// # Example
///
/// ```
/// use payroll_expressions::models::BizConfig;
///
/// let config = BizConfig::new("monthlyDivider", 160);
/// assert_eq!(config.data.as_f64(), Some(160.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BizConfig {
    /// The name the configuration is looked up by.
    pub name: String,
    /// The configured value.
    #[serde(default)]
    pub data: Value,
}

impl BizConfig {
    /// Creates a configuration entry.
    pub fn new(name: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}
