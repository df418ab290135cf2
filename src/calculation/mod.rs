//! Calculation logic for the Cost Engine.
//!
//! This module contains the pure calculation functions: the employer cost
//! of a salary, the apportionment of a budget, the cost demonstrative and
//! allocation chart views derived from them, quote totals and time-tracking
//! statistics. None of these functions perform I/O or hold state.

mod activity_stats;
mod allocation_chart;
mod amount;
mod budget_allocation;
mod cost_demonstrative;
mod employee_cost;
mod quote_totals;

pub use activity_stats::{UNCATEGORIZED_COMPANY, activity_stats, sum_durations};
pub use allocation_chart::{allocation_slices, profit_percent};
pub use amount::{MAX_AMOUNT, percent_of, round_currency, share_percent, validate_amount};
pub use budget_allocation::{
    budget_allocation_audit_steps, compute_budget_allocation, compute_budget_allocation_with_policy,
};
pub use cost_demonstrative::{MONTHS_PER_YEAR, build_cost_demonstrative};
pub use employee_cost::{
    compute_employee_cost, compute_employee_cost_with_rates, employee_cost_audit_steps,
};
pub use quote_totals::{allocate_quote, calculate_quote_totals};
