pub mod executor;
pub mod parser;

pub use executor::QueryExecutor;
pub use parser::{parse_command, Command, Query, QueryMode};
