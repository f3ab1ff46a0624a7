mod entry;

pub use entry::{AnnotatedEntry, Entry};
