//! Shared building blocks.
//!
//! ## Modules
//!
//! - [`ordered_list`] - Comparator-driven ordered sequence used by every
//!   ordered structure in the crate
//! - [`tokenizer`] - Case folding, word extraction and delimiter splitting
//! - [`progress`] - Progress spinner (no-op without the `progress` feature)
//!
//! ## Key Functions
//!
//! ```
//! use invidx::utils::{fold_case, split, tokenize_words, SplitPolicy};
//!
//! let folded = fold_case(b"Hello, World");
//! let words: Vec<String> = tokenize_words(&folded).into_iter().collect();
//! assert_eq!(words, ["hello", "world"]);
//!
//! let fields: Vec<String> = split("a.txt 2 b.txt 1", b' ', SplitPolicy::Preserve)
//!     .into_iter()
//!     .collect();
//! assert_eq!(fields, ["a.txt", "2", "b.txt", "1"]);
//! ```

pub mod ordered_list;
pub mod progress;
pub mod tokenizer;

pub use ordered_list::*;
pub use tokenizer::*;
