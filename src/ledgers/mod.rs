pub mod cards;
pub mod dex;
pub mod products;

pub use cards::{CardLedger, CardOutcome};
pub use dex::{CardDetails, DexLedger, DexRecordOutcome};
pub use products::{ProductLedger, ProductOutcome};

/// Totals from a bulk price refresh sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub updated: usize,
    pub failed: usize,
}
