//! Command pipeline shared by the `tabmap` subcommands.
//!
//! Everything here returns values instead of printing so the binary stays a
//! thin layer over it.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;

use tabmap_ingest::{ImportResult, ImportStats, import_text};
use tabmap_map::{
    TemplateStore, WorkspaceSession, distinct_values_for, header_line, parse_mapping_text,
    render_rows, reverse_row,
};
use tabmap_model::{
    Direction, ExportOptions, FilterCondition, FilterSet, ImportOptions, Language,
    MappingDefinition, TextMatch,
};

use crate::logging::redact_value;

/// Where the mapping definition comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// A JSON definition (`.json`) or pasted mapping text (anything else).
    File(PathBuf),
    /// A template in a template store document.
    Template { store: PathBuf, id: String },
}

pub fn load_definition(source: &DefinitionSource) -> Result<MappingDefinition> {
    let definition = match source {
        DefinitionSource::File(path) => {
            let contents = read_text(path)?;
            if is_json(path) {
                let definition: MappingDefinition = serde_json::from_str(&contents)
                    .with_context(|| format!("parse mapping definition {}", path.display()))?;
                definition.with_defaults()
            } else {
                parse_mapping_text(&contents)
            }
        }
        DefinitionSource::Template { store, id } => TemplateStore::open(store)?.fetch(id)?,
    };
    debug!(
        source_id = %definition.source_id,
        columns = definition.column_count(),
        "mapping definition loaded"
    );
    Ok(definition)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Parses `N=VALUE`, `N~VALUE`, `N!=VALUE` or `N!~VALUE`.
///
/// `N` is the 1-based output position of the column to filter on.
pub fn parse_filter(spec: &str) -> Result<FilterCondition> {
    let (column_index, rest) = split_position(spec)?;
    let (matching, negated, value) = if let Some(value) = rest.strip_prefix("!=") {
        (TextMatch::Equals, true, value)
    } else if let Some(value) = rest.strip_prefix("!~") {
        (TextMatch::Contains, true, value)
    } else if let Some(value) = rest.strip_prefix('=') {
        (TextMatch::Equals, false, value)
    } else if let Some(value) = rest.strip_prefix('~') {
        (TextMatch::Contains, false, value)
    } else {
        bail!("invalid filter '{spec}': expected N=VALUE, N~VALUE, N!=VALUE or N!~VALUE");
    };
    Ok(FilterCondition::text(column_index, value, matching).negated(negated))
}

/// Parses `N=a,b,c` into a value-set condition. `N=` selects only the empty value.
pub fn parse_selection(spec: &str) -> Result<FilterCondition> {
    let (column_index, rest) = split_position(spec)?;
    let Some(values) = rest.strip_prefix('=') else {
        bail!("invalid selection '{spec}': expected N=VALUE[,VALUE...]");
    };
    Ok(FilterCondition::values(column_index, values.split(',')))
}

fn split_position(spec: &str) -> Result<(usize, &str)> {
    let digits = spec.bytes().take_while(u8::is_ascii_digit).count();
    let (position, rest) = spec.split_at(digits);
    let position: usize = position
        .parse()
        .map_err(|_| anyhow!("invalid filter '{spec}': missing column position"))?;
    if position == 0 {
        bail!("invalid filter '{spec}': column positions start at 1");
    }
    Ok((position - 1, rest))
}

/// Builds the filter set from CLI filter and selection specs.
///
/// Conditions on unknown or unmapped columns are errors. Several conditions on
/// one column all have to hold.
pub fn build_filters(
    definition: &MappingDefinition,
    filters: &[String],
    selections: &[String],
) -> Result<FilterSet> {
    let mut set = FilterSet::new();
    let conditions = filters
        .iter()
        .map(|spec| parse_filter(spec))
        .chain(selections.iter().map(|spec| parse_selection(spec)));
    for condition in conditions {
        let condition = condition?;
        debug!(
            column = condition.column_index + 1,
            condition = redact_value(&format!("{:?}", condition.mode)),
            "filter added"
        );
        set.insert(definition, condition)?;
    }
    Ok(set)
}

/// Output of `tabmap project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projected {
    pub text: String,
    pub rows: usize,
    pub stats: ImportStats,
    pub truncated: usize,
}

/// Imports `text` and renders the projected grid.
///
/// The definition is committed first, so blank labels render as positional
/// placeholders. `header` adds a header line in that language; `reverse`
/// projects the grid back to the raw layout before rendering.
pub fn project_text(
    text: &str,
    definition: &MappingDefinition,
    filters: &FilterSet,
    options: &ImportOptions,
    header: Option<Language>,
    reverse: bool,
) -> Result<Projected> {
    let imported = import_text(text, definition, filters.as_slice(), options)?;
    let mut session = WorkspaceSession::new(definition.commit());
    session.apply(&imported.rows, imported.line_ending, || true);
    let export = ExportOptions {
        include_header: header.is_some(),
        language: header.unwrap_or_default(),
        direction: if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        },
    };
    Ok(Projected {
        text: session.export(export),
        rows: session.grid().len(),
        stats: imported.stats,
        truncated: imported.truncated,
    })
}

/// Reverse-projects an edited output grid back to raw-shaped rows.
///
/// `options.skip_header` drops the first line of `edited` before projection.
/// `header_language`, when set, prepends the reverse header built from the
/// committed definition. The two are independent: without `skip_header` an
/// edited header line is reverse-projected like any other row.
pub fn reverse_text(
    edited: &str,
    definition: &MappingDefinition,
    options: &ImportOptions,
    header_language: Option<Language>,
) -> Result<String> {
    let definition = &definition.commit();
    let imported = import_text(edited, definition, &[], options)?;
    let rows: Vec<Vec<String>> = imported
        .rows
        .iter()
        .map(|row| reverse_row(row, definition))
        .collect();
    let body = render_rows(&rows, imported.line_ending);
    let Some(language) = header_language else {
        return Ok(body);
    };
    let newline = imported.line_ending.as_str();
    let header = header_line(definition, language, Direction::Reverse);
    Ok(format!("{header}{newline}{body}{newline}"))
}

/// Distinct-value candidates for the column at 1-based `position`.
pub fn column_values(
    text: &str,
    definition: &MappingDefinition,
    options: &ImportOptions,
    position: usize,
) -> Result<BTreeSet<String>> {
    let imported = import_text(text, definition, &[], options)?;
    position
        .checked_sub(1)
        .and_then(|index| distinct_values_for(&imported.rows, definition, index))
        .ok_or_else(|| {
            anyhow!(
                "column {position} does not exist; the mapping has {} columns",
                definition.column_count()
            )
        })
}

/// Runs the import pipeline for `tabmap stats`.
pub fn import_stats(
    text: &str,
    definition: &MappingDefinition,
    filters: &FilterSet,
    options: &ImportOptions,
) -> Result<ImportResult> {
    Ok(import_text(text, definition, filters.as_slice(), options)?)
}
