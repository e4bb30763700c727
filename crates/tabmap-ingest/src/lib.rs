//! Tab-delimited text ingestion.
//!
//! This crate turns raw pasted or file text into [`RawRow`](tabmap_model::RawRow)s
//! ready for projection.
//!
//! # Features
//!
//! - **Tokenizing**: split on LF or CRLF and on tabs, no quoting
//! - **Boundary guard**: row and character limits with a reject or truncate policy
//! - **Import pipeline**: guard, header skip and row filters with import statistics
//!
//! # Example
//!
//! ```ignore
//! use tabmap_ingest::import_text;
//! use tabmap_model::ImportOptions;
//!
//! let result = import_text(&text, &definition, &conditions, &ImportOptions::file_import())?;
//! println!("{} of {} lines kept", result.stats.filtered_lines, result.stats.total_lines);
//! ```

mod error;
mod guard;
mod import;
mod tokenizer;

// === Error Types ===
pub use error::{GuardRejection, ImportError};

// === Tokenizing ===
pub use tokenizer::{Tokenized, split_fields, split_lines, tokenize};

// === Boundary Guard ===
pub use guard::{Admission, TextSize, admit, check};

// === Import Pipeline ===
pub use import::{ImportResult, ImportStats, import_text};
