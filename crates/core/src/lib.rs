//! Domain types and pure logic shared by the LoanPay API and dashboard.
//!
//! This crate has no database dependencies; aggregation is done against
//! rows loaded by the caller.

pub mod error;
pub mod payment;
pub mod portfolio;
pub mod types;
