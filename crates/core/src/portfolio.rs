//! Portfolio aggregates shown on the dashboard.
//!
//! Values are recomputed from full table scans on every render and never
//! persisted. The caller feeds each customer and payment row into a
//! [`PortfolioSummary`] and reads the totals back.

use serde::Serialize;

/// Running totals over every customer and payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// Number of customers seen.
    pub total_customers: usize,
    /// Sum of all payment amounts.
    pub total_collected: f64,
    /// Sum of `emi_due` over all customers.
    pub pending_emi: f64,
    #[serde(skip)]
    interest_rate_sum: f64,
}

impl PortfolioSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a summary from `(interest_rate, emi_due)` pairs and payment amounts.
    pub fn from_parts<C, P>(customers: C, payment_amounts: P) -> Self
    where
        C: IntoIterator<Item = (f64, f64)>,
        P: IntoIterator<Item = f64>,
    {
        let mut summary = Self::new();
        for (interest_rate, emi_due) in customers {
            summary.add_customer(interest_rate, emi_due);
        }
        for amount in payment_amounts {
            summary.add_payment(amount);
        }
        summary
    }

    pub fn add_customer(&mut self, interest_rate: f64, emi_due: f64) {
        self.total_customers += 1;
        self.pending_emi += emi_due;
        self.interest_rate_sum += interest_rate;
    }

    pub fn add_payment(&mut self, amount: f64) {
        self.total_collected += amount;
    }

    /// Mean interest rate across customers, `0.0` when there are none.
    pub fn average_interest_rate(&self) -> f64 {
        if self.total_customers == 0 {
            return 0.0;
        }
        self.interest_rate_sum / self.total_customers as f64
    }
}
