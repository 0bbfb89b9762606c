//! Donation categories and the selectable lines of a receipt form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// The fixed set of donation categories offered on every receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DonationCategory {
    /// Thal offering
    ThalBhet,
    /// Dhotiya (cloth offering)
    Dhotiya,
    /// Permanent tithi sponsorship
    KayamiTithi,
    /// Festival
    Utsav,
    /// Kitchen / meal sponsorship
    Rasoi,
    /// Construction or land donation
    Bandhkam,
}

impl DonationCategory {
    /// All categories in form order
    pub const ALL: [DonationCategory; 6] = [
        Self::ThalBhet,
        Self::Dhotiya,
        Self::KayamiTithi,
        Self::Utsav,
        Self::Rasoi,
        Self::Bandhkam,
    ];

    /// Short ASCII key used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::ThalBhet => "thal-bhet",
            Self::Dhotiya => "dhotiya",
            Self::KayamiTithi => "kayami-tithi",
            Self::Utsav => "utsav",
            Self::Rasoi => "rasoi",
            Self::Bandhkam => "bandhkam",
        }
    }

    /// Label printed on the receipt
    pub fn label(&self) -> &'static str {
        match self {
            Self::ThalBhet => "થાળ ભેટ",
            Self::Dhotiya => "ધોતિયા",
            Self::KayamiTithi => "કાયમી તિથિ",
            Self::Utsav => "ઉત્સવ",
            Self::Rasoi => "રસોઇ",
            Self::Bandhkam => "બાંધકામ/ભૂમિદાન",
        }
    }

    /// English description
    pub fn description(&self) -> &'static str {
        match self {
            Self::ThalBhet => "Thal offering",
            Self::Dhotiya => "Dhotiya",
            Self::KayamiTithi => "Permanent tithi",
            Self::Utsav => "Festival",
            Self::Rasoi => "Kitchen",
            Self::Bandhkam => "Construction / land donation",
        }
    }
}

impl fmt::Display for DonationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DonationCategory {
    type Err = String;

    /// Accepts the CLI key (case-insensitive) or the printed label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.label() == s)
            .ok_or_else(|| format!("unknown donation category '{}'", s))
    }
}

/// One selectable category on the receipt form
///
/// `amount` keeps the raw text as entered so that validation can tell an
/// absent amount from a malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationLine {
    pub category: DonationCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default)]
    pub selected: bool,
}

impl DonationLine {
    /// An unselected line with no amount or note
    pub fn new(category: DonationCategory) -> Self {
        Self {
            category,
            amount: None,
            note: None,
            selected: false,
        }
    }

    /// One unselected line per category, in form order
    pub fn catalog() -> Vec<DonationLine> {
        DonationCategory::ALL.iter().copied().map(Self::new).collect()
    }

    /// Label printed on the receipt
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Parsed amount, or `None` when absent or not a number
    pub fn parsed_amount(&self) -> Option<Money> {
        self.amount
            .as_deref()
            .and_then(|raw| Money::parse(raw).ok())
    }

    /// Note text, treating blank notes as absent
    pub fn note_text(&self) -> Option<&str> {
        self.note.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}
