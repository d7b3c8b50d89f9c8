//! Audit trail of helper decisions.

use serde::{Deserialize, Serialize};

/// A single recorded decision, e.g. which price list a price came from.
///
/// # Example
///
/// ```
/// use payroll_expressions::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "price_resolution".to_string(),
///     rule_name: "Price Resolution".to_string(),
///     input: serde_json::json!({ "selector": "hourlySalary" }),
///     output: serde_json::json!({ "price": 21.0, "source": "employment" }),
///     reasoning: "Employment price 21 used".to_string(),
/// };
/// assert_eq!(step.rule_id, "price_resolution");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Sequence number within the trail.
    pub step_number: u32,
    /// Machine readable rule identifier.
    pub rule_id: String,
    /// Human readable rule name.
    pub rule_name: String,
    /// The inputs the decision was based on.
    pub input: serde_json::Value,
    /// The decision.
    pub output: serde_json::Value,
    /// Human readable explanation.
    pub reasoning: String,
}
