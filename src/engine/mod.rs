mod balance;
mod errors;
mod matcher;
mod reconcile;
mod sweep_engine;

pub use errors::SweepError;
pub use sweep_engine::{SweepEngine, SweepReport};
