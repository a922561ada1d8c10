//! Index model, builder and the persisted text codec.

pub mod build;
pub mod reader;
pub mod types;
pub mod writer;

pub use build::{build_index, BuildOptions, BuildStats, IndexBuilder};
pub use reader::{parse_index, read_index_file};
pub use types::*;
pub use writer::{serialize, write_index, write_index_file, WriteMode, DEFAULT_RECORDS_PER_LINE};
