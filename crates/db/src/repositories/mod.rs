//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod customer_repo;
pub mod payment_repo;

pub use customer_repo::{CustomerRepo, SeedOutcome};
pub use payment_repo::PaymentRepo;
