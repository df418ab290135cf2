//! Configuration loading and management for the Cost Engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files: the charge policy, the employee roster and the client
//! directory.
//!
//! # Example
//!
//! ```no_run
//! use cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} employees", config.employees().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllocationPolicy, ChargePolicy, ClientsConfig, DemonstrativePolicy, EmployeeChargeRates,
    EmployeesConfig, LaborChargeRates,
};
