//! Data model for the column mapping engine.
//!
//! A [`MappingDefinition`] binds each output column to a 1-based position in a
//! raw tab-delimited record. Everything else in the engine (projection,
//! filtering, export) reads a definition and never mutates it in place.

#![deny(unsafe_code)]

pub mod column;
pub mod definition;
pub mod error;
pub mod filter;
pub mod grid;
pub mod line_ending;
pub mod options;
pub mod position;

pub use column::{Column, Language};
pub use definition::MappingDefinition;
pub use error::{ModelError, Result};
pub use filter::{EMPTY_SENTINEL, FilterCondition, FilterMode, FilterSet, TextMatch};
pub use grid::{OutputGrid, RawRow};
pub use line_ending::LineEnding;
pub use options::{Direction, ExportOptions, GuardLimits, ImportOptions, OverflowPolicy};
pub use position::SourcePosition;
