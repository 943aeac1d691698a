//! # Order
//!
//! The order entity: products in insertion order plus a lifecycle status.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation                   Effect                                     │
//! │  ─────────                   ──────                                     │
//! │  add_product(Some(p)) ─────► products.push(p)                           │
//! │  add_product(None) ────────► (ignored)                                  │
//! │  remove_product_by_id(id) ─► removes first product with that id         │
//! │  pay() ────────────────────► status = Paid, fails if no products        │
//! │  cancel(reason) ───────────► status = Cancelled(reason or default)      │
//! │  calculate_total() ────────► sum of prices (read only)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Machine
//! ```text
//!            pay()                 cancel()
//!   Created ───────► Paid ◄──────► Cancelled(reason)
//!      │                 pay()          ▲
//!      └────────────────────────────────┘
//!                    cancel()
//! ```
//! No transition checks the current status. `pay` is guarded only by the
//! order holding at least one product.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{OrderError, OrderResult};
use crate::types::{OrderStatus, PriceCalculator, Product};
use crate::DEFAULT_CANCEL_REASON;

/// Message carried by the error returned when paying an empty order.
const EMPTY_ORDER_PAYMENT: &str = "Cannot pay for an order with no products";

// =============================================================================
// Order
// =============================================================================

/// A mutable aggregate of products with a lifecycle status.
///
/// ## Invariants
/// - `id` never changes after construction
/// - Products keep insertion order; duplicate ids are allowed
/// - Products only change through `add_product` / `remove_product_by_id`
#[derive(Debug, Clone)]
pub struct Order {
    id: i64,
    products: Vec<Product>,
    status: OrderStatus,
}

impl Order {
    /// Creates an empty order in the `Created` state.
    pub fn new(id: i64) -> Self {
        Order {
            id,
            products: Vec::new(),
            status: OrderStatus::Created,
        }
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// Returns a copy of the products in insertion order.
    ///
    /// The copy is detached: changing it does not affect the order.
    pub fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Number of products, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Appends a product. `None` is ignored.
    pub fn add_product(&mut self, product: Option<Product>) {
        match product {
            Some(product) => {
                debug!(
                    order_id = self.id,
                    product_id = product.id,
                    price = product.price,
                    "Adding product"
                );
                self.products.push(product);
            }
            None => debug!(order_id = self.id, "Ignoring absent product"),
        }
    }

    /// Removes the earliest-inserted product with `product_id`.
    ///
    /// Later duplicates stay in place. Unknown ids are a no-op.
    pub fn remove_product_by_id(&mut self, product_id: i64) {
        match self.products.iter().position(|p| p.id == product_id) {
            Some(index) => {
                self.products.remove(index);
                debug!(order_id = self.id, product_id, index, "Removed product");
            }
            None => debug!(order_id = self.id, product_id, "No product to remove"),
        }
    }

    /// Marks the order as paid.
    ///
    /// ## Errors
    /// `OrderError::InvalidState` if the order has no products. The status is
    /// left unchanged in that case.
    pub fn pay(&mut self) -> OrderResult<()> {
        if self.products.is_empty() {
            warn!(order_id = self.id, status = %self.status, "Rejected payment for empty order");
            return Err(OrderError::InvalidState(EMPTY_ORDER_PAYMENT.to_string()));
        }

        debug!(order_id = self.id, from = %self.status, "Order paid");
        self.status = OrderStatus::Paid;
        Ok(())
    }

    /// Cancels the order.
    ///
    /// `None` or an empty reason records [`DEFAULT_CANCEL_REASON`]. Always
    /// succeeds, whatever the current status.
    pub fn cancel(&mut self, reason: Option<&str>) {
        let reason = reason
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_CANCEL_REASON)
            .to_string();

        debug!(order_id = self.id, from = %self.status, reason = %reason, "Order cancelled");
        self.status = OrderStatus::Cancelled { reason };
    }

    /// Read-only copy of the order, suitable for serialization.
    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot::from(self)
    }
}

impl PriceCalculator for Order {
    /// Sum of product prices, saturating at `i64::MAX` instead of overflowing.
    fn calculate_total(&self) -> i64 {
        self.products
            .iter()
            .fold(0i64, |total, p| total.saturating_add(p.price))
    }
}

// =============================================================================
// Order Snapshot
// =============================================================================

/// Detached view of an order for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub id: i64,
    pub products: Vec<Product>,
    pub status: OrderStatus,
    pub total: i64,
}

impl From<&Order> for OrderSnapshot {
    fn from(order: &Order) -> Self {
        OrderSnapshot {
            id: order.id,
            products: order.products(),
            status: order.status.clone(),
            total: order.calculate_total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
