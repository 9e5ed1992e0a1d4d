//! Exact monetary amounts.
//!
//! Prices are held as integer cents in memory and in storage. Conversion
//! to and from [`Decimal`] happens only at the API boundary, so no amount
//! ever passes through a float.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-negative amount in cents.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Money(i64);

/// Why a decimal amount cannot be held as [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Below zero.
    #[error("amount {0} must not be negative")]
    Negative(Decimal),
    /// Finer than one cent.
    #[error("amount {0} has more than two decimal places")]
    TooPrecise(Decimal),
    /// Does not fit in 64-bit cents.
    #[error("amount {0} is too large")]
    TooLarge(Decimal),
}

impl Money {
    /// Creates a value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// The value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The value as a decimal with trailing zeros removed (`950` → `9.5`).
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2).normalize()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        let normalized = amount.normalize();
        if normalized.is_sign_negative() && !normalized.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        if normalized.scale() > 2 {
            return Err(MoneyError::TooPrecise(amount));
        }

        normalized
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or(MoneyError::TooLarge(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Decimal::new(self.0, 2))
    }
}
