use rust_decimal::Decimal;
use tracing::debug;

use crate::models::Entry;

/// The two partitions produced by the offset pass, in discovery order.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub kept: Vec<Entry>,
    pub discarded: Vec<Entry>,
}

/// Cancels equal-and-opposite pairs out of a sequence sorted by descending
/// absolute amount.
///
/// The pass tracks a pending run of rows sharing one signed value, mirrored
/// by a stack of those values. A row whose amount exactly negates the top of
/// the stack retires the most recent pending row together with itself into
/// the discarded partition; any other change of value flushes the run into
/// the kept partition and starts a new run.
///
/// Known limitation, kept on purpose: cancellation only ever matches against
/// the single most recent active value, so equal-and-opposite rows separated
/// by a third distinct value are never retroactively matched. Zero rows
/// cancel pairwise, since zero negates itself.
pub fn match_offsets(rows: Vec<Entry>) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    let mut pending: Vec<Entry> = Vec::new();
    let mut values: Vec<Decimal> = Vec::new();

    for row in rows {
        let value = row.amount;
        match values.last().copied() {
            Some(top) if top == -value => {
                values.pop();
                // pending and values grow and shrink in lockstep
                if let Some(counterpart) = pending.pop() {
                    debug!(
                        "Offset pair: row [{}] ({}) cancels row [{}] ({})",
                        counterpart.original_index,
                        counterpart.amount,
                        row.original_index,
                        row.amount
                    );
                    outcome.discarded.push(counterpart);
                }
                outcome.discarded.push(row);
            }
            Some(top) if top != value => {
                outcome.kept.append(&mut pending);
                values.clear();
                values.push(value);
                pending.push(row);
            }
            _ => {
                values.push(value);
                pending.push(row);
            }
        }
    }

    outcome.kept.append(&mut pending);
    outcome
}
