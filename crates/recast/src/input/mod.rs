//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{CellMode, Parser, ParserConfig};
pub use source::{SourceMetadata, is_null_token};
