//! Column type inference: the numeric grammar, profiling and summaries.

mod numeric;
mod profile;
mod summary;

pub use numeric::{Number, is_numeric_token, parse_number};
pub use profile::{ColumnProfile, ColumnProfiler, TypeTag, profile};
pub use summary::NumericSummary;
