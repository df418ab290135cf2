//! HTTP request handlers for the Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    activity_stats, allocate_quote, allocation_slices, budget_allocation_audit_steps,
    build_cost_demonstrative, compute_budget_allocation_with_policy,
    compute_employee_cost_with_rates, employee_cost_audit_steps, profit_percent, validate_amount,
};
use crate::config::ChargePolicy;
use crate::error::EngineError;
use crate::models::{
    ActivityStats, AllocationReport, AuditTrace, BudgetAllocationResult, Client, Employee,
    EmployeeCostBreakdown, EmployeeCostReport, EmployeeSummary, Quote, QuoteTotals,
};

use super::request::{
    ActivityStatsRequest, BudgetAllocationRequest, ClientSearchQuery, EmployeeCostRequest,
};
use super::response::{ApiError, ApiErrorResponse, RoleSalaryResponse};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employee-cost", post(employee_cost_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id", get(get_employee_handler))
        .route("/employees/:id/cost", get(employee_cost_by_id_handler))
        .route("/roles/:role/average-salary", get(role_salary_handler))
        .route("/budget-allocation", post(budget_allocation_handler))
        .route("/quotes/allocation", post(quote_allocation_handler))
        .route("/clients", get(search_clients_handler))
        .route("/clients/:code", get(get_client_handler))
        .route("/activities/stats", post(activity_stats_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response.
fn json_rejection(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Logs an engine error and converts it to a response.
fn engine_failure(err: EngineError, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    err.into()
}

/// Wraps a cost breakdown with its demonstrative and audit trace.
fn employee_cost_report(
    breakdown: EmployeeCostBreakdown,
    employee_id: Option<String>,
    policy: &ChargePolicy,
    start_time: Instant,
) -> EmployeeCostReport {
    let demonstrative = build_cost_demonstrative(&breakdown, &policy.demonstrative);
    let steps = employee_cost_audit_steps(&breakdown, &policy.employee_cost, 1);

    EmployeeCostReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id,
        breakdown,
        demonstrative,
        audit_trace: AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

/// Wraps an allocation with its chart slices and audit trace.
fn allocation_report(
    allocation: BudgetAllocationResult,
    client: Option<Client>,
    quote_totals: Option<QuoteTotals>,
    policy: &ChargePolicy,
    start_time: Instant,
) -> AllocationReport {
    let steps = budget_allocation_audit_steps(&allocation, &policy.budget_allocation, 1);

    AllocationReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        client,
        quote_totals,
        profit_percent: profit_percent(&allocation),
        slices: allocation_slices(&allocation),
        allocation,
        audit_trace: AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

/// Handler for POST /employee-cost.
async fn employee_cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeCostRequest>, JsonRejection>,
) -> ApiResult<EmployeeCostReport> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee cost request");

    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;
    let gross_salary = validate_amount("gross_salary", request.gross_salary)
        .map_err(|err| engine_failure(err, correlation_id))?;

    let start_time = Instant::now();
    let policy = state.config().policy();
    let breakdown = compute_employee_cost_with_rates(gross_salary, &policy.employee_cost);
    let report = employee_cost_report(breakdown, None, policy, start_time);

    info!(
        correlation_id = %correlation_id,
        total_cost = %report.breakdown.total_cost,
        duration_us = report.audit_trace.duration_us,
        "Employee cost calculated"
    );
    Ok(Json(report))
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Json<Vec<EmployeeSummary>> {
    Json(state.config().employee_summaries())
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Employee> {
    let correlation_id = Uuid::new_v4();
    state
        .config()
        .get_employee(&id)
        .map(|employee| Json(employee.clone()))
        .map_err(|err| engine_failure(err, correlation_id))
}

/// Handler for GET /employees/:id/cost.
async fn employee_cost_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<EmployeeCostReport> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing employee cost statement");

    let start_time = Instant::now();
    let breakdown = state
        .config()
        .employee_cost(&id)
        .map_err(|err| engine_failure(err, correlation_id))?;
    let report = employee_cost_report(breakdown, Some(id), state.config().policy(), start_time);

    info!(
        correlation_id = %correlation_id,
        total_cost = %report.breakdown.total_cost,
        duration_us = report.audit_trace.duration_us,
        "Employee cost statement calculated"
    );
    Ok(Json(report))
}

/// Handler for GET /roles/:role/average-salary.
async fn role_salary_handler(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<RoleSalaryResponse> {
    let (employee_count, average_salary) = state.config().average_salary_for_role(&role);
    Json(RoleSalaryResponse {
        role,
        employee_count,
        average_salary,
    })
}

/// Handler for POST /budget-allocation.
async fn budget_allocation_handler(
    State(state): State<AppState>,
    payload: Result<Json<BudgetAllocationRequest>, JsonRejection>,
) -> ApiResult<AllocationReport> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing budget allocation request");

    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;
    let total_budget = validate_amount("total_budget", request.total_budget)
        .map_err(|err| engine_failure(err, correlation_id))?;

    let start_time = Instant::now();
    let policy = state.config().policy();
    let allocation = compute_budget_allocation_with_policy(total_budget, &policy.budget_allocation);
    let report = allocation_report(allocation, None, None, policy, start_time);

    info!(
        correlation_id = %correlation_id,
        total_budget = %total_budget,
        residual_margin = %report.allocation.residual_margin,
        duration_us = report.audit_trace.duration_us,
        "Budget allocation calculated"
    );
    Ok(Json(report))
}

/// Handler for POST /quotes/allocation.
async fn quote_allocation_handler(
    State(state): State<AppState>,
    payload: Result<Json<Quote>, JsonRejection>,
) -> ApiResult<AllocationReport> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote allocation request");

    let Json(quote) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;
    validate_amount("discount", quote.discount)
        .map_err(|err| engine_failure(err, correlation_id))?;
    for item in &quote.items {
        validate_amount("unit_price", item.unit_price)
            .map_err(|err| engine_failure(err, correlation_id))?;
    }

    let start_time = Instant::now();
    let policy = state.config().policy();
    let (totals, allocation) = allocate_quote(&quote, &policy.budget_allocation)
        .map_err(|err| engine_failure(err, correlation_id))?;
    let report = allocation_report(
        allocation,
        Some(quote.client),
        Some(totals),
        policy,
        start_time,
    );

    info!(
        correlation_id = %correlation_id,
        items = quote.items.len(),
        total = %totals.total,
        duration_us = report.audit_trace.duration_us,
        "Quote allocation calculated"
    );
    Ok(Json(report))
}

/// Handler for GET /clients.
async fn search_clients_handler(
    State(state): State<AppState>,
    Query(query): Query<ClientSearchQuery>,
) -> Json<Vec<Client>> {
    Json(
        state
            .config()
            .search_clients(&query.search)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// Handler for GET /clients/:code.
async fn get_client_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Client> {
    let correlation_id = Uuid::new_v4();
    state
        .config()
        .get_client(&code)
        .map(|client| Json(client.clone()))
        .map_err(|err| engine_failure(err, correlation_id))
}

/// Handler for POST /activities/stats.
async fn activity_stats_handler(
    payload: Result<Json<ActivityStatsRequest>, JsonRejection>,
) -> ApiResult<ActivityStats> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing activity statistics request");

    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;
    let stats = activity_stats(&request.entries);

    info!(
        correlation_id = %correlation_id,
        entries = stats.entry_count,
        total_time = %stats.total_time,
        "Activity statistics calculated"
    );
    Ok(Json(stats))
}
