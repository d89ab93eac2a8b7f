use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

const MAX_PRICE_SCALE: i64 = 4;

/// Product price: a non-negative decimal with at most 4 fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(value: BigDecimal) -> Result<Self, ProductError> {
        if value < BigDecimal::zero() {
            return Err(ProductError::InvalidPrice);
        }

        // Trailing zeros do not count towards the scale: 1.50000 is 1.5.
        let (_, scale) = value.normalized().as_bigint_and_exponent();
        if scale > MAX_PRICE_SCALE {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self(value))
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &BigDecimal {
        &self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BigDecimal::from_str(s).map_err(|_| ProductError::InvalidPrice)?;
        Self::new(value)
    }
}
