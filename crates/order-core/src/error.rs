//! # Error Types
//!
//! Domain-specific error types for order-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderError                                                             │
//! │  ├── InvalidState   - Operation not allowed in the current state        │
//! │  └── LockPoisoned   - Shared order lock poisoned by a panicked holder   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both are surfaced to the immediate caller. Nothing in this crate retries.

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Errors raised by order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The order is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Paying for an order that holds no products
    ///
    /// The caller can recover by adding products and retrying.
    #[error("{0}")]
    InvalidState(String),

    /// A thread panicked while holding the lock of a shared order.
    #[error("Order lock poisoned")]
    LockPoisoned,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_displays_message_verbatim() {
        let err = OrderError::InvalidState("Cannot pay for an order with no products".to_string());
        assert_eq!(err.to_string(), "Cannot pay for an order with no products");
    }

    #[test]
    fn test_lock_poisoned_message() {
        assert_eq!(OrderError::LockPoisoned.to_string(), "Order lock poisoned");
    }
}
