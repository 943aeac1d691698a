//! # Shared Order State
//!
//! `Order` assumes a single caller. When an embedding layer needs to reach
//! one order from several threads it wraps it in an [`OrderState`].
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderState ── Arc<Mutex<Order>>                                        │
//! │                                                                         │
//! │  with_order(|o| ...)      ──► lock, read, release                       │
//! │  with_order_mut(|o| ...)  ──► lock, mutate, release                     │
//! │                                                                         │
//! │  One lock per order. Clones share the same order.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::error;

use crate::error::{OrderError, OrderResult};
use crate::order::Order;

/// Lock-guarded handle to a single order.
#[derive(Debug, Clone)]
pub struct OrderState {
    order: Arc<Mutex<Order>>,
}

impl OrderState {
    /// Creates shared state for a new empty order.
    pub fn new(id: i64) -> Self {
        Self::from_order(Order::new(id))
    }

    /// Takes ownership of an existing order.
    pub fn from_order(order: Order) -> Self {
        OrderState {
            order: Arc::new(Mutex::new(order)),
        }
    }

    /// Executes a function with read access to the order.
    ///
    /// ## Usage
    /// ```rust
    /// use order_core::{OrderState, PriceCalculator};
    ///
    /// let state = OrderState::new(1);
    /// let total = state.with_order(|o| o.calculate_total()).unwrap();
    /// assert_eq!(total, 0);
    /// ```
    pub fn with_order<F, R>(&self, f: F) -> OrderResult<R>
    where
        F: FnOnce(&Order) -> R,
    {
        let order = self.order.lock().map_err(|_| {
            error!("Order mutex poisoned");
            OrderError::LockPoisoned
        })?;
        Ok(f(&order))
    }

    /// Executes a function with write access to the order.
    ///
    /// ## Usage
    /// ```rust
    /// use order_core::{OrderState, Product};
    ///
    /// let state = OrderState::new(1);
    /// state.with_order_mut(|o| o.add_product(Some(Product::new(1, 10)))).unwrap();
    /// state.with_order_mut(|o| o.pay()).unwrap().unwrap();
    /// ```
    pub fn with_order_mut<F, R>(&self, f: F) -> OrderResult<R>
    where
        F: FnOnce(&mut Order) -> R,
    {
        let mut order = self.order.lock().map_err(|_| {
            error!("Order mutex poisoned");
            OrderError::LockPoisoned
        })?;
        Ok(f(&mut order))
    }
}
