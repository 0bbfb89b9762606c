//! Receipt models
//!
//! A [`ReceiptDraft`] is the in-progress form: donor details plus the fixed
//! list of donation lines. Once validated it is frozen into a
//! [`ReceiptRecord`] carrying an issued receipt number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::donation::{DonationCategory, DonationLine};
use super::ids::ReceiptId;
use super::money::Money;
use crate::error::{ReceiptError, ReceiptResult};
use crate::numbering::ReceiptNumber;
use crate::validation;
use crate::words;

/// Required donor fields of a receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorDetails {
    pub donor_name: String,
    pub date: String,
    pub city: String,
    pub received_by: String,
}

impl DonorDetails {
    pub fn new(
        donor_name: impl Into<String>,
        date: impl Into<String>,
        city: impl Into<String>,
        received_by: impl Into<String>,
    ) -> Self {
        Self {
            donor_name: donor_name.into(),
            date: date.into(),
            city: city.into(),
            received_by: received_by.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.donor_name.trim(),
            self.date.trim(),
            self.city.trim(),
            self.received_by.trim(),
        )
    }
}

/// The receipt form being filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDraft {
    pub donor: DonorDetails,
    pub lines: Vec<DonationLine>,
}

impl Default for ReceiptDraft {
    fn default() -> Self {
        Self {
            donor: DonorDetails::default(),
            lines: DonationLine::catalog(),
        }
    }
}

impl ReceiptDraft {
    /// Create an empty form for the given donor
    pub fn new(donor: DonorDetails) -> Self {
        Self {
            donor,
            lines: DonationLine::catalog(),
        }
    }

    fn line_mut(&mut self, category: DonationCategory) -> ReceiptResult<&mut DonationLine> {
        self.lines
            .iter_mut()
            .find(|l| l.category == category)
            .ok_or_else(|| ReceiptError::category_not_found(category.key()))
    }

    /// Flip the selection of a category
    pub fn toggle(&mut self, category: DonationCategory) -> ReceiptResult<()> {
        let line = self.line_mut(category)?;
        line.selected = !line.selected;
        Ok(())
    }

    /// Select a category and set its raw amount text
    pub fn select_with_amount(
        &mut self,
        category: DonationCategory,
        amount: impl Into<String>,
    ) -> ReceiptResult<()> {
        let line = self.line_mut(category)?;
        line.selected = true;
        line.amount = Some(amount.into());
        Ok(())
    }

    /// Set the raw amount text of a category
    pub fn set_amount(
        &mut self,
        category: DonationCategory,
        amount: impl Into<String>,
    ) -> ReceiptResult<()> {
        self.line_mut(category)?.amount = Some(amount.into());
        Ok(())
    }

    /// Set the note of a category
    pub fn set_note(
        &mut self,
        category: DonationCategory,
        note: impl Into<String>,
    ) -> ReceiptResult<()> {
        self.line_mut(category)?.note = Some(note.into());
        Ok(())
    }

    /// Clear donor details and restore every line to its initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the form can be turned into a receipt
    pub fn is_submittable(&self) -> bool {
        validation::is_submittable(&self.donor, &self.lines)
    }

    /// Sum of the selected amounts
    pub fn total(&self) -> Money {
        validation::compute_total(&self.lines)
    }
}

/// A donation line on an issued receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub category: DonationCategory,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ReceiptLine {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// An issued receipt
///
/// The total and its words are always derived from `lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub id: ReceiptId,
    pub receipt_number: ReceiptNumber,
    pub donor: DonorDetails,
    pub lines: Vec<ReceiptLine>,
    pub created_at: DateTime<Utc>,
}

impl ReceiptRecord {
    /// Freeze a draft under the given receipt number
    ///
    /// Only selected lines with a parseable amount are carried over; callers
    /// validate the draft first.
    pub fn from_draft(receipt_number: ReceiptNumber, draft: &ReceiptDraft) -> Self {
        let lines = validation::selected_lines(&draft.lines)
            .filter_map(|line| {
                line.parsed_amount().map(|amount| ReceiptLine {
                    category: line.category,
                    amount,
                    note: line.note_text().map(str::to_string),
                })
            })
            .collect();

        Self {
            id: ReceiptId::new(),
            receipt_number,
            donor: draft.donor.trimmed(),
            lines,
            created_at: Utc::now(),
        }
    }

    /// Sum of all line amounts
    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(|l| l.amount).sum()
    }

    /// The total in words, e.g. "One Hundred Only"
    pub fn total_amount_words(&self) -> ReceiptResult<String> {
        words::amount_in_words(self.total_amount())
    }
}
