use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use tabmap_cli::pipeline::{
    DefinitionSource, build_filters, column_values, import_stats, load_definition, project_text,
    read_text, reverse_text,
};
use tabmap_map::format_mapping_text;
use tabmap_model::{GuardLimits, ImportOptions, Language, MappingDefinition, OverflowPolicy};

use crate::cli::{
    ImportArgs, LanguageArg, LimitsArg, MappingArgs, ProjectArgs, ReverseArgs, ShowArgs,
    ShowFormatArg, StatsArgs, ValuesArgs,
};
use crate::summary::{print_definition, print_stats, print_values};

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let definition = load_mapping(&args.mapping)?;
    match args.format {
        ShowFormatArg::Table => print_definition(&definition),
        ShowFormatArg::Text => println!("{}", format_mapping_text(&definition)),
        ShowFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&definition).context("serialize definition")?
        ),
    }
    Ok(())
}

pub fn run_project(args: &ProjectArgs) -> Result<()> {
    let span = info_span!("project", input = %args.input.display());
    let _guard = span.enter();

    let definition = load_mapping(&args.mapping)?;
    let filters = build_filters(&definition, &args.filter.filters, &args.filter.selections)?;
    let text = read_text(&args.input)?;
    let projected = project_text(
        &text,
        &definition,
        &filters,
        &import_options(&args.import),
        args.header.map(language),
        args.reverse,
    )?;
    if projected.truncated > 0 {
        warn!(
            discarded = projected.truncated,
            "input truncated to the row limit"
        );
    }
    info!(
        total_lines = projected.stats.total_lines,
        rows = projected.rows,
        filters = filters.len(),
        reverse = args.reverse,
        "projection complete"
    );
    emit(&projected.text, args.output.as_deref())
}

pub fn run_reverse(args: &ReverseArgs) -> Result<()> {
    let span = info_span!("reverse", input = %args.edited.display());
    let _guard = span.enter();

    let definition = load_mapping(&args.mapping)?;
    let text = read_text(&args.edited)?;
    let restored = reverse_text(
        &text,
        &definition,
        &import_options(&args.import),
        args.header.map(language),
    )?;
    info!(
        width = definition.max_source_position(),
        "reverse projection complete"
    );
    emit(&restored, args.output.as_deref())
}

pub fn run_values(args: &ValuesArgs) -> Result<()> {
    let definition = load_mapping(&args.mapping)?;
    let text = read_text(&args.input)?;
    let values = column_values(
        &text,
        &definition,
        &import_options(&args.import),
        args.column,
    )?;
    info!(column = args.column, values = values.len(), "distinct values collected");
    print_values(&definition, args.column, &values);
    Ok(())
}

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let definition = load_mapping(&args.mapping)?;
    let filters = build_filters(&definition, &args.filter.filters, &args.filter.selections)?;
    let text = read_text(&args.input)?;
    let result = import_stats(&text, &definition, &filters, &import_options(&args.import))?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.stats).context("serialize statistics")?
        );
    } else {
        print_stats(&result);
    }
    Ok(())
}

fn load_mapping(args: &MappingArgs) -> Result<MappingDefinition> {
    let source = match (&args.mapping, &args.templates, &args.template) {
        (Some(path), _, _) => DefinitionSource::File(path.clone()),
        (None, Some(store), Some(id)) => DefinitionSource::Template {
            store: store.clone(),
            id: id.clone(),
        },
        _ => anyhow::bail!("either --mapping or --templates with --template is required"),
    };
    load_definition(&source)
}

fn import_options(args: &ImportArgs) -> ImportOptions {
    let limits = match args.limits {
        LimitsArg::Paste => GuardLimits::paste(),
        LimitsArg::File => GuardLimits::file_import(),
    };
    ImportOptions {
        limits,
        overflow: if args.truncate {
            OverflowPolicy::Truncate
        } else {
            OverflowPolicy::Reject
        },
        skip_header: args.skip_header,
    }
}

fn language(arg: LanguageArg) -> Language {
    match arg {
        LanguageArg::Primary => Language::Primary,
        LanguageArg::Secondary => Language::Secondary,
    }
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("write stdout")?;
            if !text.is_empty() && !text.ends_with('\n') {
                stdout.write_all(b"\n").context("write stdout")?;
            }
        }
    }
    Ok(())
}
