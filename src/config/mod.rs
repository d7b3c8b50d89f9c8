//! Configuration loading for the expression helpers.
//!
//! This module loads the script defaults and the named business
//! configuration entries from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_expressions::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded configuration: {}", config.config().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BizConfigsFile, DefaultHourlyRow, EngineConfig, ScriptDefaults};
