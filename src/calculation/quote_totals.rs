//! Quote totals and quote allocation.
//!
//! This module sums the lines of a quote, applies its discount, and feeds
//! the resulting total to the budget allocator.

use rust_decimal::Decimal;

use super::amount::MAX_AMOUNT;
use super::budget_allocation::compute_budget_allocation_with_policy;
use crate::config::AllocationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{BudgetAllocationResult, ItemKind, Quote, QuoteItem, QuoteTotals};

/// Sums quote lines and applies a discount.
///
/// # Returns
///
/// Returns the totals, or `InvalidQuote` if:
/// - Any line has a zero quantity or a negative unit price
/// - Any line total or the subtotal exceeds [`MAX_AMOUNT`]
/// - The discount is negative or greater than the subtotal
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::calculate_quote_totals;
/// use cost_engine::models::{ItemKind, QuoteItem};
/// use rust_decimal::Decimal;
///
/// let items = vec![QuoteItem {
///     kind: ItemKind::Service,
///     code: "SRV-001".to_string(),
///     description: "Pintura".to_string(),
///     quantity: 4,
///     unit_price: Decimal::new(250, 0),
/// }];
///
/// let totals = calculate_quote_totals(&items, Decimal::new(100, 0)).unwrap();
/// assert_eq!(totals.subtotal, Decimal::new(1000, 0));
/// assert_eq!(totals.total, Decimal::new(900, 0));
/// ```
pub fn calculate_quote_totals(items: &[QuoteItem], discount: Decimal) -> EngineResult<QuoteTotals> {
    let mut service_subtotal = Decimal::ZERO;
    let mut material_subtotal = Decimal::ZERO;

    for item in items {
        if item.quantity == 0 {
            return Err(EngineError::InvalidQuote {
                message: format!("item '{}' has zero quantity", item.code),
            });
        }
        if item.unit_price.is_sign_negative() && !item.unit_price.is_zero() {
            return Err(EngineError::InvalidQuote {
                message: format!("item '{}' has a negative unit price", item.code),
            });
        }

        let line_total = item
            .line_total()
            .filter(|total| *total <= MAX_AMOUNT)
            .ok_or_else(|| EngineError::InvalidQuote {
                message: format!("item '{}' total exceeds {}", item.code, MAX_AMOUNT),
            })?;

        let running = match item.kind {
            ItemKind::Service => &mut service_subtotal,
            ItemKind::Material => &mut material_subtotal,
        };
        *running += line_total;

        // Both subtotals stay within MAX_AMOUNT, so the next addition cannot overflow.
        if service_subtotal + material_subtotal > MAX_AMOUNT {
            return Err(EngineError::InvalidQuote {
                message: format!("subtotal exceeds {}", MAX_AMOUNT),
            });
        }
    }

    let subtotal = service_subtotal + material_subtotal;

    if discount.is_sign_negative() && !discount.is_zero() {
        return Err(EngineError::InvalidQuote {
            message: "discount must not be negative".to_string(),
        });
    }
    if discount > subtotal {
        return Err(EngineError::InvalidQuote {
            message: format!("discount {} exceeds subtotal {}", discount, subtotal),
        });
    }

    Ok(QuoteTotals {
        subtotal,
        service_subtotal,
        material_subtotal,
        discount,
        total: subtotal - discount,
    })
}

/// Checks a quote, totals it and apportions its total.
///
/// The allocation uses the policy's service share on the quote total,
/// regardless of how the lines are split between services and materials.
pub fn allocate_quote(
    quote: &Quote,
    policy: &AllocationPolicy,
) -> EngineResult<(QuoteTotals, BudgetAllocationResult)> {
    quote.ensure_ready()?;
    let totals = quote.totals()?;
    let allocation = compute_budget_allocation_with_policy(totals.total, policy);
    Ok((totals, allocation))
}
