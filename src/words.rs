//! Amounts in words, Indian numbering system
//!
//! Numbers are decomposed largest band first: crore (1,00,00,000), lakh
//! (1,00,000), thousand, hundred, then a two-digit tail. Every rendering ends
//! with "Only", as printed on receipts. The currency prefix is left to the
//! caller.

use crate::error::{ReceiptError, ReceiptResult};
use crate::models::Money;

pub const THOUSAND: u64 = 1_000;
pub const LAKH: u64 = 100_000;
pub const CRORE: u64 = 10_000_000;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Bands above a hundred, largest first
const BANDS: [(u64, &str); 3] = [(CRORE, "Crore"), (LAKH, "Lakh"), (THOUSAND, "Thousand")];

/// Render a whole number in words
///
/// # Examples
/// ```
/// use receipt_cli::words::to_words;
/// assert_eq!(to_words(0), "Zero Only");
/// assert_eq!(to_words(1_05_000), "One Lakh Five Thousand Only");
/// ```
pub fn to_words(n: u64) -> String {
    format!("{} Only", spell(n))
}

/// Render a money amount in words
///
/// Whole-rupee amounts render exactly like [`to_words`]. Amounts with paise
/// name both units: "Ten Rupees and Fifty Paise Only".
///
/// # Errors
///
/// Negative amounts are rejected with [`ReceiptError::InvalidAmount`].
pub fn amount_in_words(amount: Money) -> ReceiptResult<String> {
    if amount.is_negative() {
        return Err(ReceiptError::InvalidAmount(format!(
            "cannot render a negative amount in words: {}",
            amount
        )));
    }

    let rupees = amount.rupees().unsigned_abs();
    let paise = amount.paise_part().unsigned_abs();

    let words = match (rupees, paise) {
        (r, 0) => spell(r),
        (0, p) => format!("{} Paise", spell(p)),
        (r, p) => format!("{} Rupees and {} Paise", spell(r), spell(p)),
    };

    Ok(format!("{} Only", words))
}

fn spell(n: u64) -> String {
    if n == 0 {
        "Zero".to_string()
    } else {
        compose(n)
    }
}

/// Words for `n > 0`
fn compose(n: u64) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }

    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return match n % 10 {
            0 => tens.to_string(),
            ones => format!("{} {}", tens, ONES[ones as usize]),
        };
    }

    if n < THOUSAND {
        let head = format!("{} Hundred", ONES[(n / 100) as usize]);
        return match n % 100 {
            0 => head,
            rest => format!("{} and {}", head, compose(rest)),
        };
    }

    let (size, name) = BANDS
        .iter()
        .copied()
        .find(|(size, _)| n >= *size)
        .unwrap_or(BANDS[BANDS.len() - 1]);

    let head = format!("{} {}", compose(n / size), name);
    match n % size {
        0 => head,
        rest => format!("{} {}", head, compose(rest)),
    }
}
