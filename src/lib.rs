//! Expression helpers for payroll calculation scripts
//!
//! This crate provides the helpers customer scripts use to customise a payroll
//! calculation: row queries and aggregates, employment/company price
//! resolution, decimal-correct rounding and pricing period buckets, together
//! with the script extension-point traits and an HTTP adapter.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod expressions;
pub mod models;
pub mod scripts;
