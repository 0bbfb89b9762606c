//! Money type for representing rupee amounts
//!
//! Internally stores amounts in paise (i64) to avoid floating-point precision
//! issues. Display uses Indian digit grouping (`1,00,000.00`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Currency prefixes accepted (and ignored) when parsing
const ACCEPTED_PREFIXES: [&str; 4] = ["Rs.", "Rs", "INR", "₹"];

/// Largest amount accepted from user input: one lakh crore rupees
pub const MAX_PARSED_RUPEES: i64 = 1_000_000_000_000;

/// Represents a monetary amount stored as paise (hundredths of a rupee)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from paise
    ///
    /// # Examples
    /// ```
    /// use receipt_cli::models::Money;
    /// let amount = Money::from_paise(1050); // Rs.10.50
    /// assert_eq!(amount.rupees(), 10);
    /// ```
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Create a Money amount from whole rupees
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees.saturating_mul(100))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in paise
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Get the whole rupees portion (truncated toward zero)
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Get the paise portion (0-99)
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "100", "100.5", "100.50", ".5", "Rs.100", "₹100", "-25".
    /// Digits after the second decimal place are truncated. Amounts above
    /// [`MAX_PARSED_RUPEES`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, trimmed),
        };

        let rest = ACCEPTED_PREFIXES
            .iter()
            .find_map(|prefix| rest.strip_prefix(prefix))
            .unwrap_or(rest)
            .trim();

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let rupees: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        if rupees > MAX_PARSED_RUPEES {
            return Err(MoneyParseError::TooLarge(s.trim().to_string()));
        }

        // Fraction is ASCII-only past this point, so byte slicing is safe
        let paise: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = rupees
            .checked_mul(100)
            .and_then(|p| p.checked_add(paise))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Plain decimal form without grouping or symbol: `1500`, `10.50`
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let rupees = self.rupees().unsigned_abs();
        match self.paise_part() {
            0 => format!("{}{}", sign, rupees),
            paise => format!("{}{}.{:02}", sign, rupees, paise),
        }
    }

    /// Format with a currency prefix, e.g. `Rs.1,00,000.00`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_indian(self.rupees().unsigned_abs()),
            self.paise_part()
        )
    }
}

/// Group digits the Indian way: last three, then pairs (`12,34,567`)
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("Rs."))
    }
}

// Saturates at the i64 bounds instead of wrapping
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("Amount too large: {0}")]
    TooLarge(String),
}
