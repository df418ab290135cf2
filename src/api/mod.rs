//! HTTP API module for the Cost Engine.
//!
//! This module exposes the employee cost and budget allocation calculators,
//! the employee roster and the client directory as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ActivityStatsRequest, BudgetAllocationRequest, ClientSearchQuery, EmployeeCostRequest,
};
pub use response::{ApiError, ApiErrorResponse, RoleSalaryResponse};
pub use state::AppState;
