//! Dashboard views. Each view loads its rows through `loanpay-db` and
//! renders a full HTML page.

pub mod customers;
pub mod history;
pub mod overview;
pub mod payment;
