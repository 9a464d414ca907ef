//! Export pipeline - one request, from source to artifact
//!
//! Fetch → filter → build rows → project → export → (optionally) beautify.

use std::path::PathBuf;

use anyhow::{Context, bail};
use log::{debug, info};

use super::beautifier::beautify_file;
use super::builder::build_rows;
use super::exporter::{ExportFormat, export};
use super::filter::FilterCriteria;
use super::projector::{effective_columns, project};
use crate::core::models::{Column, ReportRow};
use crate::core::ports::PlannerSource;

/// Everything one export needs
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Remote plan identifier
    pub plan_id: String,
    /// Filters and pull mode
    pub criteria: FilterCriteria,
    /// Selected columns (empty = all)
    pub columns: Vec<Column>,
    /// Artifact format
    pub format: ExportFormat,
    /// Artifact path
    pub destination: PathBuf,
    /// Rewrite pull-request URLs as links (Markdown only)
    pub beautify_links: bool,
}

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Tasks returned by the source
    pub tasks_fetched: usize,
    /// Rows written to the artifact
    pub rows_written: usize,
    /// Rows standing in for tasks that failed to process
    pub error_rows: usize,
    /// Distinct pull-request links rewritten
    pub links_beautified: usize,
    /// Columns written
    pub columns: Vec<Column>,
    /// Artifact format
    pub format: ExportFormat,
    /// Artifact path
    pub destination: PathBuf,
}

/// Fetch a plan and build its sorted report rows
///
/// Fails when the criteria are invalid, the source cannot list tasks or
/// buckets, or the plan has no tasks.
pub fn collect_rows<S>(
    source: &S,
    plan_id: &str,
    criteria: &FilterCriteria,
) -> anyhow::Result<(usize, Vec<ReportRow>)>
where
    S: PlannerSource + ?Sized,
{
    criteria.validate()?;

    let tasks = source
        .list_tasks(plan_id)
        .with_context(|| format!("failed to fetch tasks for plan '{plan_id}'"))?;
    if tasks.is_empty() {
        bail!("no tasks returned for plan '{plan_id}'");
    }
    debug!("Fetched {} task(s) for plan {plan_id}", tasks.len());

    let buckets = source
        .bucket_lookup(plan_id)
        .with_context(|| format!("failed to fetch buckets for plan '{plan_id}'"))?;
    let users = source.user_lookup(&tasks);

    let rows = build_rows(&tasks, &buckets, &users, source, criteria);
    Ok((tasks.len(), rows))
}

/// Run one export request end to end
pub fn run_export<S>(source: &S, request: &ExportRequest) -> anyhow::Result<ExportSummary>
where
    S: PlannerSource + ?Sized,
{
    let (tasks_fetched, rows) = collect_rows(source, &request.plan_id, &request.criteria)?;
    let error_rows = rows.iter().filter(|r| r.is_error()).count();

    let columns = effective_columns(&request.columns);
    let projected = project(&rows, &columns);
    export(&projected, &columns, request.format, &request.destination)?;

    let links_beautified = if request.beautify_links && request.format == ExportFormat::Markdown {
        beautify_file(&request.destination)?
    } else {
        0
    };

    info!(
        "Exported {} row(s) from {tasks_fetched} task(s) ({error_rows} failed)",
        projected.len()
    );
    Ok(ExportSummary {
        tasks_fetched,
        rows_written: projected.len(),
        error_rows,
        links_beautified,
        columns,
        format: request.format,
        destination: request.destination.clone(),
    })
}
