//! Request types for the expression helper API.
//!
//! This module defines the JSON request structures for the `/evaluate` endpoint.

use serde::{Deserialize, Serialize};

use crate::context::ScriptContext;

/// Request body for the `/evaluate` endpoint.
///
/// Contains the script context and the helper queries to run against it.
/// Queries are evaluated in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The context the queries read from.
    #[serde(default)]
    pub context: ScriptContext,
    /// The queries to evaluate.
    pub queries: Vec<HelperQuery>,
}

/// A single helper call, tagged by `op`.
///
/// Selectors are strings: a value with a `/` after its first character is a
/// type path, anything else a row type. Predicates are not available over
/// the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HelperQuery {
    /// All matching rows.
    Rows {
        /// Row selector.
        selector: String,
    },
    /// The first matching row, or null.
    First {
        /// Row selector.
        selector: String,
    },
    /// The last matching row, or null.
    Last {
        /// Row selector.
        selector: String,
    },
    /// Sum of `count * price` over matching rows.
    Sum {
        /// Row selector.
        selector: String,
    },
    /// Sum of counts over matching rows.
    Count {
        /// Row selector.
        selector: String,
    },
    /// Count-weighted average price, or null when undefined.
    AvgPrice {
        /// Row selector.
        selector: String,
        /// Decimals; the configured rounding precision when omitted.
        #[serde(default)]
        precision: Option<u32>,
    },
    /// Lowest price among matching rows.
    MinPrice {
        /// Row selector.
        selector: String,
    },
    /// Highest price among matching rows.
    MaxPrice {
        /// Row selector.
        selector: String,
    },
    /// Employment price with company fallback.
    Price {
        /// Price-list selector.
        selector: String,
    },
    /// Employment price only.
    EmploymentPrice {
        /// Price-list selector.
        selector: String,
    },
    /// Company price only.
    CompanyPrice {
        /// Price-list selector.
        selector: String,
    },
    /// Price with its source and an audit step.
    ResolvePrice {
        /// Price-list selector.
        selector: String,
    },
    /// Currency rounding; null when either input is missing.
    Round {
        /// The value to round.
        #[serde(default)]
        value: Option<f64>,
        /// Decimals.
        #[serde(default)]
        decimals: Option<u32>,
    },
    /// Pricing bucket start date.
    PricingPeriodStart {
        /// `yyyy-MM-dd`; the calculation's work start date when omitted.
        #[serde(default)]
        work_start_date: Option<String>,
    },
    /// Raw value of a business configuration entry.
    ConfigValue {
        /// Entry name.
        name: String,
    },
}

impl HelperQuery {
    /// The `op` tag of the query.
    pub fn op(&self) -> &'static str {
        match self {
            HelperQuery::Rows { .. } => "rows",
            HelperQuery::First { .. } => "first",
            HelperQuery::Last { .. } => "last",
            HelperQuery::Sum { .. } => "sum",
            HelperQuery::Count { .. } => "count",
            HelperQuery::AvgPrice { .. } => "avg_price",
            HelperQuery::MinPrice { .. } => "min_price",
            HelperQuery::MaxPrice { .. } => "max_price",
            HelperQuery::Price { .. } => "price",
            HelperQuery::EmploymentPrice { .. } => "employment_price",
            HelperQuery::CompanyPrice { .. } => "company_price",
            HelperQuery::ResolvePrice { .. } => "resolve_price",
            HelperQuery::Round { .. } => "round",
            HelperQuery::PricingPeriodStart { .. } => "pricing_period_start",
            HelperQuery::ConfigValue { .. } => "config_value",
        }
    }
}
