//! Grading economics: whether a card is worth sending for professional grading.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grading-service fee for a single card, in USD.
pub const GRADING_FEE: f64 = 22.0;
/// Fee multiplier covering shipping and return postage.
pub const FEE_MULTIPLIER: f64 = 2.2;

/// Minimum PSA 10 market price at which grading pays for itself.
pub fn grading_threshold() -> f64 {
    GRADING_FEE * FEE_MULTIPLIER
}

// ---------------------------------------------------------------------------
// GradeVerdict
// ---------------------------------------------------------------------------

/// Outcome of the grading-worthiness check.
///
/// `Unknown` is kept distinct from `NotWorthwhile`: a card whose PSA 10
/// price could not be fetched answers "No" to the yes/no question, but the
/// ledger records that the price was missing rather than low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeVerdict {
    #[serde(rename = "Yes")]
    Worthwhile,
    #[serde(rename = "No")]
    NotWorthwhile,
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl GradeVerdict {
    /// Assess a PSA 10 market price against the grading threshold.
    ///
    /// Strictly greater-than: a card priced exactly at the threshold is not
    /// worth grading. A missing or non-finite price assesses to `Unknown`.
    pub fn assess(psa10_price: Option<f64>) -> Self {
        match psa10_price {
            Some(price) if price.is_finite() => {
                if price > grading_threshold() {
                    GradeVerdict::Worthwhile
                } else {
                    GradeVerdict::NotWorthwhile
                }
            }
            _ => GradeVerdict::Unknown,
        }
    }

    pub fn is_worthwhile(self) -> bool {
        matches!(self, GradeVerdict::Worthwhile)
    }
}

impl fmt::Display for GradeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GradeVerdict::Worthwhile => "Yes",
            GradeVerdict::NotWorthwhile => "No",
            GradeVerdict::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}
