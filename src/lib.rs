//! Payroll cost and budget allocation engine for Brazilian labor charges.
//!
//! This crate computes the employer cost of a salary (INSS patronal, FGTS,
//! thirteenth salary and vacation provisions) and apportions a budget across
//! services, materials, profit, labor, service tax and residual margin. It
//! also serves these calculations over a JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
