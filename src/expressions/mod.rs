//! Expression helpers for calculation scripts.
//!
//! This module contains the building blocks scripts use to read a
//! calculation:
//!
//! - [`selector`] - Selecting rows and price-list entries
//! - [`rows`] - Row queries and aggregates
//! - [`prices`] - Employment/company price resolution
//! - [`rounding`] - Currency rounding to a number of decimals
//! - [`fiscal_bucket`] - Pricing period buckets for average hourly pay
//! - [`helpers`] - The facade combining all of the above

pub mod fiscal_bucket;
pub mod helpers;
pub mod prices;
pub mod rounding;
pub mod rows;
pub mod selector;

pub use fiscal_bucket::{bucket_start, pricing_period_start, pricing_period_start_on};
pub use helpers::ExpressionHelpers;
pub use prices::{PriceResolution, PriceSource, PricesHelper};
pub use rounding::{DEFAULT_PRECISION, round, round_opt};
pub use rows::RowsHelper;
pub use selector::{RowPredicate, RowRef, RowTypeSelector};
