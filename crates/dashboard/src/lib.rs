//! LoanPay dashboard: a server-rendered HTML front-end over the shared
//! `loanpay-db` layer.
//!
//! Runs as its own process against the same SQLite file as the API. The
//! two never talk to each other.

pub mod config;
pub mod error;
pub mod format;
pub mod html;
pub mod router;
pub mod shutdown;
pub mod state;
pub mod views;
