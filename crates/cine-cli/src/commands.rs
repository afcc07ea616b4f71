use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info_span};

use cine_engine::{Catalog, DisplayConfig, TitleView};
use cine_model::{Axis, Query};

use crate::cli::{OptionsArgs, OutputFormatArg, SearchArgs};
use crate::render::{
    NO_RESULTS, fields_table, footer, render_cards, render_json, results_table,
};

/// Filtered titles ready for rendering.
#[derive(Debug)]
pub struct SearchOutcome {
    pub query: Query,
    /// Matches before the display cap.
    pub total: usize,
    pub views: Vec<TitleView>,
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(path).with_context(|| format!("load catalog {}", path.display()))
}

/// Load the catalog, or log the failure and fall back to an empty one.
///
/// The error is returned alongside so the caller can set the exit status.
pub fn load_catalog_or_empty(path: &Path) -> (Catalog, Option<anyhow::Error>) {
    match load_catalog(path) {
        Ok(catalog) => (catalog, None),
        Err(err) => {
            error!(path = %path.display(), error = %format!("{err:#}"), "failed to load catalog");
            (Catalog::empty(), Some(err))
        }
    }
}

pub fn run_search(catalog: &Catalog, args: &SearchArgs, config: &DisplayConfig) -> SearchOutcome {
    let query = args.filters.to_query();
    let span = info_span!("search", query = %query);
    let _guard = span.enter();

    let matched = catalog.filter(&query);
    let total = matched.len();
    let limit = match args.limit.unwrap_or_else(|| config.limit_for(&query)) {
        0 => total,
        limit => limit,
    };
    let views = matched
        .into_iter()
        .take(limit)
        .map(|title| TitleView::new(title, config))
        .collect();
    SearchOutcome {
        query,
        total,
        views,
    }
}

pub fn print_search(
    outcome: &SearchOutcome,
    format: OutputFormatArg,
    config: &DisplayConfig,
) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormatArg::Json => {
            let json = render_json(&outcome.views, outcome.total).context("serialize results")?;
            writeln!(out, "{json}")?;
        }
        _ if outcome.views.is_empty() => writeln!(out, "{NO_RESULTS}")?,
        OutputFormatArg::Table => {
            writeln!(out, "{}", results_table(&outcome.views, &config.placeholder))?;
            writeln!(out, "{}", footer(outcome.views.len(), outcome.total))?;
        }
        OutputFormatArg::Cards => {
            writeln!(out, "{}", render_cards(&outcome.views))?;
            writeln!(out)?;
            writeln!(out, "{}", footer(outcome.views.len(), outcome.total))?;
        }
    }
    Ok(())
}

pub fn run_options(catalog: &Catalog, args: &OptionsArgs) -> Vec<String> {
    let axis = Axis::from(args.axis);
    let query = args.filters.to_query();
    let span = info_span!("options", axis = %axis, query = %query);
    let _guard = span.enter();
    catalog.available_values(&query, axis)
}

pub fn print_options(values: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();
    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

pub fn print_fields(catalog: &Catalog) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", fields_table(catalog.fields()))?;
    writeln!(out, "{} titles loaded", catalog.len())?;
    Ok(())
}
