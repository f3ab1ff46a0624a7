use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::AmountError;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Input file not found: {0}")]
    InputMissing(String),
    #[error("Column 'amount' is missing from {0}")]
    AmountColumnMissing(String),
    #[error("Row {row}: {source}")]
    Amount { row: usize, source: AmountError },
    #[error("Totals do not reconcile: kept total [{kept}] differs from input total [{input}]")]
    Reconciliation { input: Decimal, kept: Decimal },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
