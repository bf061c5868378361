//! Usage analytics read model.

/// Independent cardinalities of the three service collections.
///
/// Each count is taken separately; the totals are not a consistent snapshot
/// of a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsageTotals {
    pub total_users: u64,
    pub total_drivers: u64,
    pub total_rides: u64,
}
