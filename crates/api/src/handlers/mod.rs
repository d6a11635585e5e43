pub mod customers;
pub mod payments;
pub mod seed;
