//! Quote (orçamento) models.
//!
//! This module defines the [`Quote`] issued to a client, its line items,
//! its lifecycle status and the [`QuoteTotals`] computed from it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Client;
use crate::calculation::calculate_quote_totals;
use crate::error::{EngineError, EngineResult};

/// Whether a quote line is a service or a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Labor or other service.
    Service,
    /// Supplied material.
    Material,
}

/// The lifecycle status of a quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Being edited.
    #[default]
    Draft,
    /// Sent to the client.
    Sent,
    /// Accepted by the client.
    Approved,
    /// Declined by the client.
    Rejected,
}

/// A single line of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Service or material.
    pub kind: ItemKind,
    /// Catalog code of the product or service.
    pub code: String,
    /// Description shown to the client.
    pub description: String,
    /// Number of units.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Decimal,
}

impl QuoteItem {
    /// Returns quantity times unit price, or `None` if the product overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use cost_engine::models::{ItemKind, QuoteItem};
    /// use rust_decimal::Decimal;
    ///
    /// let item = QuoteItem {
    ///     kind: ItemKind::Material,
    ///     code: "MAT-010".to_string(),
    ///     description: "Cimento CP-II 50kg".to_string(),
    ///     quantity: 3,
    ///     unit_price: Decimal::new(3290, 2),
    /// };
    /// assert_eq!(item.line_total(), Some(Decimal::new(9870, 2)));
    /// ```
    pub fn line_total(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }
}

/// A quote issued to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote number, assigned once the quote is sent.
    #[serde(default)]
    pub number: Option<String>,
    /// Issue date.
    pub date: NaiveDate,
    /// The client the quote is addressed to.
    pub client: Client,
    /// Line items.
    pub items: Vec<QuoteItem>,
    /// Discount subtracted from the subtotal.
    #[serde(default)]
    pub discount: Decimal,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: QuoteStatus,
}

impl Quote {
    /// Checks that the quote can be finalized.
    ///
    /// A quote needs a client code, a client name and at least one item.
    pub fn ensure_ready(&self) -> EngineResult<()> {
        if self.client.code.trim().is_empty() || self.client.name.trim().is_empty() {
            return Err(EngineError::InvalidQuote {
                message: "client code and name are required".to_string(),
            });
        }

        if self.items.is_empty() {
            return Err(EngineError::InvalidQuote {
                message: "quote must contain at least one item".to_string(),
            });
        }

        Ok(())
    }

    /// Sums the quote's items and applies its discount.
    ///
    /// See [`calculate_quote_totals`] for the checks applied.
    pub fn totals(&self) -> EngineResult<QuoteTotals> {
        calculate_quote_totals(&self.items, self.discount)
    }
}

/// Totals of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Sum of every line total.
    pub subtotal: Decimal,
    /// Sum of the service lines.
    pub service_subtotal: Decimal,
    /// Sum of the material lines.
    pub material_subtotal: Decimal,
    /// Discount applied.
    pub discount: Decimal,
    /// Subtotal minus discount.
    pub total: Decimal,
}
