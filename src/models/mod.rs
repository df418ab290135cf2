//! Core data models for the Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod activity;
mod budget_allocation;
mod client;
mod employee;
mod employee_cost;
mod quote;
mod report;

pub use activity::{ActivityEntry, ActivityStats, WorkDuration};
pub use budget_allocation::{
    AllocationCategory, AllocationSlice, BudgetAllocationResult, LaborCharges,
};
pub use client::Client;
pub use employee::{ContractType, Employee, EmployeeStatus, EmployeeSummary};
pub use employee_cost::{CostDemonstrative, CostLine, CostShare, EmployeeCostBreakdown};
pub use quote::{ItemKind, Quote, QuoteItem, QuoteStatus, QuoteTotals};
pub use report::{AllocationReport, AuditStep, AuditTrace, EmployeeCostReport};
