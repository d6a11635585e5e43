#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced entity does not exist. `key` is the lookup value
    /// (an account number for customers).
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
}

impl CoreError {
    /// Not-found error for a customer looked up by account number.
    pub fn customer_not_found(account_number: &str) -> Self {
        CoreError::NotFound {
            entity: "Customer",
            key: account_number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_not_found_carries_account_number() {
        let err = CoreError::customer_not_found("ACC9999");
        match &err {
            CoreError::NotFound { entity, key } => {
                assert_eq!(*entity, "Customer");
                assert_eq!(key, "ACC9999");
            }
        }
        assert_eq!(err.to_string(), "Customer not found: ACC9999");
    }
}
