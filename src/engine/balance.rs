use rust_decimal::Decimal;

use crate::models::{AnnotatedEntry, Entry};

pub const BALANCE_DECIMALS: u32 = 2;

/// Appends debit/credit/running-balance columns to an ordered sequence.
///
/// The balance accumulates credit minus debit in the given order and is
/// rounded to two decimals at every step, not only at the end. Step-wise
/// rounding can drift from a single final rounding; the drift is accepted
/// behavior.
pub fn annotate(entries: Vec<Entry>) -> Vec<AnnotatedEntry> {
    let mut annotated = Vec::with_capacity(entries.len());
    let mut balance = Decimal::ZERO;

    for entry in entries {
        let debit = entry.debit();
        let credit = entry.credit();
        balance = (balance - debit + credit).round_dp(BALANCE_DECIMALS);

        annotated.push(AnnotatedEntry {
            entry,
            debit,
            credit,
            balance,
        });
    }

    annotated
}
