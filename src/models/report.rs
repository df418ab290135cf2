//! Calculation report models for the Cost Engine.
//!
//! This module contains the [`AuditStep`] and [`AuditTrace`] records that
//! explain every computed figure, and the report envelopes returned for an
//! employee cost calculation and a budget allocation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    AllocationSlice, BudgetAllocationResult, Client, CostDemonstrative, EmployeeCostBreakdown,
    QuoteTotals,
};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute backing the rule, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_basis: Option<String>,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the figure.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use cost_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The result of an employee cost calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCostReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for, when it came from the roster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The computed charges and provisions.
    pub breakdown: EmployeeCostBreakdown,
    /// Monthly, annual and hourly view of the breakdown.
    pub demonstrative: CostDemonstrative,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

/// The result of a budget allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The client, when the allocation was made for a quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,
    /// The quote totals, when the allocation was made for a quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_totals: Option<QuoteTotals>,
    /// The allocation itself.
    pub allocation: BudgetAllocationResult,
    /// Total profit as a percentage of the budget, rounded to two places.
    pub profit_percent: Decimal,
    /// Chart slices of the allocation.
    pub slices: Vec<AllocationSlice>,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_step_skips_missing_legal_basis() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "service_split".to_string(),
            rule_name: "Service Split".to_string(),
            legal_basis: None,
            input: serde_json::json!({ "total_budget": "100" }),
            output: serde_json::json!({ "service_value": "50" }),
            reasoning: "R$ 100 x 50% = R$ 50".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(!json.contains("legal_basis"));
        assert!(json.contains("\"rule_id\":\"service_split\""));
    }

    #[test]
    fn test_audit_step_includes_legal_basis_when_present() {
        let step = AuditStep {
            step_number: 2,
            rule_id: "employer_social_security".to_string(),
            rule_name: "INSS Patronal".to_string(),
            legal_basis: Some("Lei 8.212/1991, art. 22, I".to_string()),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: String::new(),
        };

        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(
            value["legal_basis"].as_str().unwrap(),
            "Lei 8.212/1991, art. 22, I"
        );
    }
}
