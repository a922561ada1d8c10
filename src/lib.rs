//! # invidx - plain-text inverted index
//!
//! invidx walks a file tree, counts how often every lowercase alphanumeric
//! word occurs in every document, writes the result as a line-oriented text
//! file, and answers AND/OR word queries against a loaded file.
//!
//! ## Architecture
//!
//! - [`utils`] - Ordered list, tokenizers and case folding
//! - [`index`] - Index model, builder and the text codec
//! - [`query`] - Command parsing and AND/OR execution
//! - [`shell`] - Line-oriented search session
//! - [`output`] - Result formatting
//! - [`config`] - User configuration
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```no_run
//! use invidx::index::{build_index, serialize, parse_index, BuildOptions};
//! use invidx::query::{Query, QueryExecutor};
//! use std::path::Path;
//!
//! let index = build_index(Path::new("docs"), &BuildOptions::default()).unwrap();
//! let text = serialize(&index, 5);
//!
//! let loaded = parse_index(&text).unwrap();
//! let results = QueryExecutor::new(&loaded).execute(&Query::and(["fox", "dog"]));
//! for path in results {
//!     println!("{path}");
//! }
//! ```
//!
//! ## Index file format
//!
//! ```text
//! <list> dog
//! docs/a.txt 3 docs/b.txt 1
//! </list>
//! ```
//!
//! Each entry lists `PATH COUNT` pairs, at most five per line by default.

pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod output;
pub mod query;
pub mod shell;
pub mod utils;
