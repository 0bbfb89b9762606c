//! Receipt form validation and totals
//!
//! Validation and summation read the same lines but apply different policies
//! to a bad amount: validation fails on it, summation counts it as zero.
//! Neither function mutates its input and validation never errors.

use std::fmt;

use crate::models::{DonationLine, DonorDetails, Money, MoneyParseError};

/// A single reason a form is not submittable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A required donor field is empty or whitespace
    MissingField(&'static str),
    /// No donation category is selected
    NothingSelected,
    /// A selected line has no amount
    MissingAmount(&'static str),
    /// A selected line's amount is not a number
    NonNumericAmount(&'static str),
    /// A selected line's amount is zero or negative
    NonPositiveAmount(&'static str),
    /// A selected line's amount is above the accepted maximum
    AmountTooLarge(&'static str),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required", field),
            Self::NothingSelected => write!(f, "select at least one donation"),
            Self::MissingAmount(label) => write!(f, "{}: amount is required", label),
            Self::NonNumericAmount(label) => write!(f, "{}: amount is not a number", label),
            Self::NonPositiveAmount(label) => {
                write!(f, "{}: amount must be greater than zero", label)
            }
            Self::AmountTooLarge(label) => write!(f, "{}: amount is too large", label),
        }
    }
}

/// Lines that take part in totals and submission
pub fn selected_lines(lines: &[DonationLine]) -> impl Iterator<Item = &DonationLine> {
    lines.iter().filter(|line| line.selected)
}

/// Every rule the form currently breaks, in form order
pub fn check(donor: &DonorDetails, lines: &[DonationLine]) -> Vec<ValidationIssue> {
    let required = [
        ("Name", &donor.donor_name),
        ("Date", &donor.date),
        ("City", &donor.city),
        ("Received by", &donor.received_by),
    ];

    let mut issues: Vec<ValidationIssue> = required
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| ValidationIssue::MissingField(field))
        .collect();

    let mut any_selected = false;
    for line in selected_lines(lines) {
        any_selected = true;
        if let Some(issue) = amount_issue(line) {
            issues.push(issue);
        }
    }

    if !any_selected {
        issues.push(ValidationIssue::NothingSelected);
    }

    issues
}

fn amount_issue(line: &DonationLine) -> Option<ValidationIssue> {
    let label = line.label();
    match line.amount.as_deref().map(str::trim) {
        None | Some("") => Some(ValidationIssue::MissingAmount(label)),
        Some(raw) => match Money::parse(raw) {
            Err(MoneyParseError::TooLarge(_)) => Some(ValidationIssue::AmountTooLarge(label)),
            Err(_) => Some(ValidationIssue::NonNumericAmount(label)),
            Ok(amount) if !amount.is_positive() => Some(ValidationIssue::NonPositiveAmount(label)),
            Ok(_) => None,
        },
    }
}

/// Whether the form can be turned into a receipt
pub fn is_submittable(donor: &DonorDetails, lines: &[DonationLine]) -> bool {
    check(donor, lines).is_empty()
}

/// Sum of the selected amounts, counting absent or malformed amounts as zero
pub fn compute_total(lines: &[DonationLine]) -> Money {
    selected_lines(lines)
        .map(|line| line.parsed_amount().unwrap_or_default())
        .sum()
}
