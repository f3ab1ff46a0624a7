use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use rust_decimal::Decimal;
use tracing::info;

use crate::engine::balance::{BALANCE_DECIMALS, annotate};
use crate::engine::errors::SweepError;
use crate::engine::matcher::match_offsets;
use crate::engine::reconcile::reconcile;
use crate::models::{AnnotatedEntry, Entry};
use crate::types::normalize;

const AMOUNT_COLUMN: &str = "amount";
const CLEANED_SUFFIX: &str = "-cleaned.csv";
const DISCARDED_SUFFIX: &str = "-discarded.csv";
const DERIVED_COLUMNS: [&str; 3] = ["debit", "credit", "balance"];

/// Summary of a completed run.
#[derive(Debug)]
pub struct SweepReport {
    pub cleaned_path: PathBuf,
    pub discarded_path: PathBuf,
    pub kept_rows: usize,
    pub discarded_rows: usize,
}

/// Single-pass batch pipeline over one CSV export.
pub struct SweepEngine;

impl SweepEngine {
    pub fn new() -> Self {
        Self
    }

    /// Runs the full pipeline for `<stem>.csv`.
    ///
    /// Loads and normalizes every row, sorts by descending absolute amount,
    /// cancels offsetting pairs, verifies that the totals reconcile, then
    /// writes `<stem>-cleaned.csv` and `<stem>-discarded.csv` with the rows
    /// back in original order plus the derived balance columns.
    pub fn run(&self, stem: &str) -> Result<SweepReport, SweepError> {
        let input = PathBuf::from(format!("{stem}.csv"));
        if !input.exists() {
            return Err(SweepError::InputMissing(input.display().to_string()));
        }

        let (headers, amount_column, entries) = self.read_entries(&input)?;
        let total_before = round_total(&entries);

        let mut by_magnitude = entries;
        by_magnitude.sort_by(|a, b| b.amount.abs().cmp(&a.amount.abs()));

        let outcome = match_offsets(by_magnitude);

        let cleaned_path = PathBuf::from(format!("{stem}{CLEANED_SUFFIX}"));
        let discarded_path = PathBuf::from(format!("{stem}{DISCARDED_SUFFIX}"));

        // Stale outputs from a prior run are removed before the
        // reconciliation gate, so a failing run still deletes them. Kept
        // from the original tool.
        remove_stale(&cleaned_path)?;
        remove_stale(&discarded_path)?;

        let total_kept = round_total(&outcome.kept);
        let total_discarded: Decimal = outcome.discarded.iter().map(|entry| entry.amount).sum();
        reconcile(total_before, total_kept, total_discarded)?;

        let kept = annotate(chronological(outcome.kept));
        let discarded = annotate(chronological(outcome.discarded));

        self.write_partition(&cleaned_path, &headers, amount_column, &kept)?;
        self.write_partition(&discarded_path, &headers, amount_column, &discarded)?;

        info!(
            "Swept {} rows: {} kept, {} discarded",
            kept.len() + discarded.len(),
            kept.len(),
            discarded.len()
        );

        Ok(SweepReport {
            cleaned_path,
            discarded_path,
            kept_rows: kept.len(),
            discarded_rows: discarded.len(),
        })
    }

    fn read_entries(&self, input: &Path) -> Result<(StringRecord, usize, Vec<Entry>), SweepError> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(input)?;

        let headers = reader.headers()?.clone();
        let amount_column = headers
            .iter()
            .position(|header| header == AMOUNT_COLUMN)
            .ok_or_else(|| SweepError::AmountColumnMissing(input.display().to_string()))?;

        let mut entries = Vec::new();
        for (position, record) in reader.records().enumerate() {
            let record = record?;
            let original_index = position + 1;
            let raw = record.get(amount_column).unwrap_or("");
            let amount = normalize(raw).map_err(|source| SweepError::Amount {
                row: original_index,
                source,
            })?;
            entries.push(Entry::new(original_index, amount, record));
        }

        Ok((headers, amount_column, entries))
    }

    fn write_partition(
        &self,
        path: &Path,
        headers: &StringRecord,
        amount_column: usize,
        rows: &[AnnotatedEntry],
    ) -> Result<(), SweepError> {
        let mut writer = WriterBuilder::new().from_path(path)?;

        let mut header_row = headers.clone();
        for column in DERIVED_COLUMNS {
            header_row.push_field(column);
        }
        writer.write_record(&header_row)?;

        for row in rows {
            let mut record = StringRecord::new();
            for (index, field) in row.entry.record.iter().enumerate() {
                if index == amount_column {
                    record.push_field(&money(row.entry.amount));
                } else {
                    record.push_field(field);
                }
            }
            record.push_field(&money(row.debit));
            record.push_field(&money(row.credit));
            record.push_field(&money(row.balance));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn chronological(mut rows: Vec<Entry>) -> Vec<Entry> {
    rows.sort_by_key(|row| row.original_index);
    rows
}

fn round_total(rows: &[Entry]) -> Decimal {
    rows.iter()
        .map(|row| row.amount)
        .sum::<Decimal>()
        .round_dp(BALANCE_DECIMALS)
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(BALANCE_DECIMALS))
}

fn remove_stale(path: &Path) -> Result<(), SweepError> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
