mod amount;
mod errors;
#[cfg(test)]
mod tests;

pub use amount::{ZERO_AMOUNT, normalize};
pub use errors::AmountError;

pub type RowIndex = usize;
