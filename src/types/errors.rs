use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: {0:?} is not a numeric amount")]
    Unparseable(String),
}
