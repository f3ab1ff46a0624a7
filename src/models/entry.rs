use csv::StringRecord;
use rust_decimal::Decimal;

use crate::types::RowIndex;

/// A single input row with its normalized amount.
///
/// Every column except `amount` is opaque to the pipeline and carried in
/// `record` untouched. `original_index` is the 1-based position in the input
/// file and exists only to restore chronological order after the
/// magnitude-sorted matching pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// 1-based position in the input file, assigned once at load time.
    pub original_index: RowIndex,
    /// Signed amount, derived once from the raw field.
    pub amount: Decimal,
    /// The raw input columns, passed through unchanged.
    pub record: StringRecord,
}

impl Entry {
    pub fn new(original_index: RowIndex, amount: Decimal, record: StringRecord) -> Self {
        Self {
            original_index,
            amount,
            record,
        }
    }

    /// Positive amounts book as debits.
    pub fn debit(&self) -> Decimal {
        if self.amount > Decimal::ZERO {
            self.amount
        } else {
            Decimal::ZERO
        }
    }

    /// Negative amounts book as credits, with the magnitude made positive.
    pub fn credit(&self) -> Decimal {
        if self.amount < Decimal::ZERO {
            -self.amount
        } else {
            Decimal::ZERO
        }
    }
}

/// An entry carrying its derived debit/credit/running-balance columns.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedEntry {
    pub entry: Entry,
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
}
