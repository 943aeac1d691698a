//! # Domain Types
//!
//! Types an order is built from.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    Product      │   │     OrderStatus      │   │ PriceCalculator │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  id (i64)       │   │  Created             │   │ calculate_total │  │
//! │  │  price (i64)    │   │  Paid                │   └─────────────────┘  │
//! │  └─────────────────┘   │  Cancelled { reason }│                        │
//! │                        └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// An item referenced by an order.
///
/// Products are owned by the catalog; an order keeps its own copies and never
/// mutates them. Ids are not unique within an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: i64,

    /// Price in the smallest currency unit. Assumed non-negative.
    pub price: i64,
}

impl Product {
    #[inline]
    pub const fn new(id: i64, price: i64) -> Self {
        Product { id, price }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle state of an order.
///
/// There is no transition table: `pay` and `cancel` may move an order from
/// any state to `Paid` or `Cancelled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OrderStatus {
    /// Freshly created order.
    Created,
    /// Order has been paid.
    Paid,
    /// Order was cancelled with a reason.
    Cancelled { reason: String },
}

impl OrderStatus {
    #[inline]
    pub fn is_paid(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled { .. })
    }

    /// Returns the cancellation reason, if the order is cancelled.
    pub fn cancel_reason(&self) -> Option<&str> {
        match self {
            OrderStatus::Cancelled { reason } => Some(reason),
            _ => None,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Created
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Created => write!(f, "Created"),
            OrderStatus::Paid => write!(f, "Paid"),
            OrderStatus::Cancelled { reason } => write!(f, "Cancelled({})", reason),
        }
    }
}

// =============================================================================
// Price Calculator
// =============================================================================

/// Anything that can report a total price.
///
/// ## Usage
/// ```rust
/// use order_core::{Order, PriceCalculator, Product};
///
/// fn grand_total(items: &[&dyn PriceCalculator]) -> i64 {
///     items.iter().map(|i| i.calculate_total()).sum()
/// }
///
/// let mut a = Order::new(1);
/// a.add_product(Some(Product::new(1, 100)));
/// let mut b = Order::new(2);
/// b.add_product(Some(Product::new(2, 50)));
///
/// assert_eq!(grand_total(&[&a, &b]), 150);
/// ```
pub trait PriceCalculator {
    /// Total price in the smallest currency unit.
    fn calculate_total(&self) -> i64;
}

// =============================================================================
// Unit Tests
// =============================================================================
