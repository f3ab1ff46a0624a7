//! Generates a synthetic ERP-style export for exercising the sweeper.
//!
//! Usage: `cargo run --example generate_sample [num_rows] [output_path]`

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

const PROBABILITY_OFFSET_PAIR: f64 = 0.3;
const PROBABILITY_BLANK_AMOUNT: f64 = 0.05;

const MEMOS: [&str; 6] = [
    "invoice",
    "consulting fee",
    "supplies",
    "subscription",
    "refund",
    "license renewal",
];

struct GeneratorConfig {
    num_rows: usize,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_rows = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(200);
        let output_path = args.get(2).cloned().unwrap_or_else(|| "sample.csv".to_string());

        Self { num_rows, output_path }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    let file = File::create(&config.output_path)?;
    let mut writer = BufWriter::new(file);
    let mut rng = rand::rng();

    writeln!(writer, "date,memo,amount")?;

    let mut written = 0usize;
    while written < config.num_rows {
        let roll: f64 = rng.random();

        if roll < PROBABILITY_OFFSET_PAIR && written + 2 <= config.num_rows {
            // An entry plus its exact reversal, which the sweeper should
            // move into the discarded file.
            let amount = random_amount(&mut rng);
            write_row(&mut writer, written, pick_memo(&mut rng), &format_currency(amount))?;
            write_row(&mut writer, written + 1, "reversal", &format_currency(-amount))?;
            written += 2;
        } else if roll < PROBABILITY_OFFSET_PAIR + PROBABILITY_BLANK_AMOUNT {
            write_row(&mut writer, written, "pending", "")?;
            written += 1;
        } else {
            let amount = random_amount(&mut rng);
            write_row(&mut writer, written, pick_memo(&mut rng), &format_currency(amount))?;
            written += 1;
        }
    }

    writer.flush()?;
    println!("Wrote {} rows to {}", config.num_rows, config.output_path);

    Ok(())
}

fn pick_memo<R: Rng>(rng: &mut R) -> &'static str {
    MEMOS.choose(rng).copied().unwrap_or(MEMOS[0])
}

fn random_amount<R: Rng>(rng: &mut R) -> Decimal {
    let cents: i64 = if rng.random_bool(0.2) {
        rng.random_range(-5_000_000..-1)
    } else {
        rng.random_range(1..5_000_000)
    };

    Decimal::new(cents, 2)
}

fn write_row<W: Write>(writer: &mut W, position: usize, memo: &str, amount: &str) -> io::Result<()> {
    let month = 1 + (position / 28) % 12;
    let day = 1 + position % 28;
    let field = if amount.contains(',') {
        format!("\"{amount}\"")
    } else {
        amount.to_string()
    };

    writeln!(writer, "2024-{month:02}-{day:02},{memo},{field}")
}

fn format_currency(value: Decimal) -> String {
    let text = format!("{:.2}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (position, digit) in int_part.chars().rev().enumerate() {
        if position > 0 && position % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    format!("{sign}${int_grouped}.{frac_part}")
}
