//! Payment constants.
//!
//! Every payment recorded today succeeds; no code path writes any other
//! status value.

/// Status written on every newly recorded payment.
pub const STATUS_SUCCESS: &str = "Success";
