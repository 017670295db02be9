//! Money type for representing monetary values.
//!
//! Amounts are stored in the smallest unit of the currency to avoid
//! floating-point precision issues. For COP that unit is the whole peso,
//! which is also how the storefront prices its catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Currencies the storefront can price in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Colombian peso, the store's home currency.
    #[default]
    COP,
    USD,
    EUR,
    MXN,
}

impl Currency {
    /// Get the currency code (e.g., "COP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::COP => "COP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::COP => "$",
            Currency::USD => "US$",
            Currency::EUR => "\u{20ac}",
            Currency::MXN => "MX$",
        }
    }

    /// Number of decimal places shown for this currency.
    ///
    /// Pesos are displayed whole, the way Colombian storefronts price them.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::COP => 0,
            _ => 2,
        }
    }

    /// Thousands separator used when formatting.
    pub fn grouping_separator(&self) -> char {
        match self {
            Currency::COP | Currency::EUR => '.',
            Currency::USD | Currency::MXN => ',',
        }
    }

    /// Decimal separator used when formatting.
    pub fn decimal_separator(&self) -> char {
        match self {
            Currency::COP | Currency::EUR => ',',
            Currency::USD | Currency::MXN => '.',
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "COP" => Some(Currency::COP),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "MXN" => Some(Currency::MXN),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (pesos for COP, cents for USD).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a peso amount, the storefront's default.
    pub fn pesos(amount: i64) -> Self {
        Self::new(amount, Currency::COP)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Try to add another Money value.
    ///
    /// Returns None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_sub(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format as a display string, e.g. `$ 1.250.000` for COP.
    ///
    /// This is the locale-specific currency formatter the page layer uses;
    /// callers that need raw values should read `amount_minor` directly.
    pub fn display(&self) -> String {
        // es-CO convention puts a space between symbol and amount.
        match self.currency {
            Currency::COP => format!("{} {}", self.currency.symbol(), self.display_amount()),
            _ => format!("{}{}", self.currency.symbol(), self.display_amount()),
        }
    }

    /// Format the amount without the symbol, e.g. `1.250.000`.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);
        let negative = self.amount_minor < 0;
        let magnitude = self.amount_minor.unsigned_abs();
        let whole = magnitude / divisor as u64;
        let frac = magnitude % divisor as u64;

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(whole, self.currency.grouping_separator()));
        if places > 0 {
            out.push(self.currency.decimal_separator());
            out.push_str(&format!("{:0width$}", frac, width = places as usize));
        }
        out
    }
}

/// Insert a grouping separator every three digits.
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_add` where the
    /// operands are not known to match.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("Currency mismatch in subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    /// # Panics
    /// Panics on overflow. Use `try_multiply` for untrusted factors.
    fn mul(self, factor: i64) -> Money {
        self.try_multiply(factor).expect("Overflow in multiplication")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
