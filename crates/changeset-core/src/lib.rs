pub mod error;
mod merge;
pub mod types;

pub use error::*;
pub use merge::{merge_records, sort_chronologically};
pub use types::*;
