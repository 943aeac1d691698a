//! # order-core: Order Entity and Status Machine
//!
//! A minimal in-memory order: an ordered bag of products, a status that moves
//! between `Created`, `Paid` and `Cancelled(reason)`, and a total price.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Embedding layer (API, storage, catalog)  ── outside this crate        │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ order-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   order   │  │   state   │  │   error   │  │   │
//! │  │   │  Product  │  │   Order   │  │OrderState │  │OrderError │  │   │
//! │  │   │  Status   │  │ Snapshot  │  │ (Mutex)   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product`, `OrderStatus` and the `PriceCalculator` trait
//! - [`order`] - The `Order` entity
//! - [`state`] - `OrderState`, a lock-guarded handle for shared access
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use order_core::{Order, OrderStatus, PriceCalculator, Product};
//!
//! let mut order = Order::new(1);
//! order.add_product(Some(Product::new(10, 500)));
//! order.add_product(Some(Product::new(11, 250)));
//! assert_eq!(order.calculate_total(), 750);
//!
//! order.pay().unwrap();
//! assert_eq!(*order.status(), OrderStatus::Paid);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod order;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{OrderError, OrderResult};
pub use order::{Order, OrderSnapshot};
pub use state::OrderState;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Reason recorded when an order is cancelled without one.
pub const DEFAULT_CANCEL_REASON: &str = "Unknown reason";
