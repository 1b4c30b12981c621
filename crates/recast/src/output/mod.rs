//! Export of repaired datasets.

mod writer;

pub use writer::{
    OutputFormat, preview, save_dataset, to_records, write_dataset, write_delimited, write_json,
};
