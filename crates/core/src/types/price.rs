//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept in the currency's standard unit (reais, dollars) as a
//! [`Decimal`], never as floating point, so cart totals add up exactly.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places used for display and totals.
pub const CURRENCY_SCALE: u32 = 2;

/// Errors that can occur when working with currencies.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The currency code is not one we support.
    #[error("unknown currency code: {0}")]
    Unknown(String),
    /// Two prices in different currencies were combined.
    #[error("currency mismatch: {left:?} and {right:?}")]
    Mismatch {
        /// Currency of the left-hand price.
        left: CurrencyCode,
        /// Currency of the right-hand price.
        right: CurrencyCode,
    },
}

/// A price with currency information.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use vitrine_core::{CurrencyCode, Price};
///
/// let unit = Price::from_cents(14_990, CurrencyCode::BRL);
/// assert_eq!(unit.times(2).to_string(), "R$ 299.80");
/// assert_eq!(unit.amount, Decimal::new(14_990, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(cents, CURRENCY_SCALE), currency_code)
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Multiply the amount by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Add two prices of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::Mismatch` if the currencies differ.
    pub fn checked_add(self, other: Self) -> Result<Self, CurrencyError> {
        if self.currency_code != other.currency_code {
            return Err(CurrencyError::Mismatch {
                left: self.currency_code,
                right: other.currency_code,
            });
        }
        Ok(Self::new(self.amount + other.amount, self.currency_code))
    }

    /// Round to two decimal places, half away from zero.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero),
            self.currency_code,
        )
    }

    /// Whole percentage by which `self` is cheaper than `original`.
    ///
    /// Returns `None` when the currencies differ or `original` is not higher.
    #[must_use]
    pub fn percent_off(self, original: Self) -> Option<u32> {
        if self.currency_code != original.currency_code || original.amount <= self.amount {
            return None;
        }
        let ratio = (original.amount - self.amount) / original.amount * Decimal::ONE_HUNDRED;
        let whole = ratio.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        u32::try_from(whole.mantissa()).ok()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        write!(
            f,
            "{} {:.2}",
            self.currency_code.symbol(),
            rounded.amount
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::BRL),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(CurrencyError::Unknown(s.to_owned())),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
