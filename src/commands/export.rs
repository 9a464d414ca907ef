//! Export command - pull a plan and write a report

use anyhow::bail;
use log::debug;

use planex::adapters::snapshot::SnapshotSource;
use planex::config::GlobalConfig;
use planex::core::ports::PlannerSource;
use planex::core::services::{
    DateRange, ExportFormat, ExportRequest, FilterCriteria, PullMode, parse_columns, run_export,
};
use planex::output::{ExportResult, OutputMode};
use planex::paths;

use crate::cli::ExportArgs;

/// Handle `planex export`
pub fn export(args: ExportArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();

    let format: ExportFormat = args.format.as_deref().unwrap_or(&config.export.format).parse()?;
    let columns =
        parse_columns(args.columns.as_deref().or(config.export.columns.as_deref()).unwrap_or(""))?;
    let criteria = criteria(&args)?;
    let beautify_links = args.beautify_links || config.export.beautify_links;
    let plan_id = args.plan.as_deref().map(|plan| config.resolve_plan(plan).to_string());
    let output = args.output.clone();

    let request = move |plan_id: String, plan_label: &str| ExportRequest {
        destination: output
            .unwrap_or_else(|| paths::default_artifact(plan_label, format.extension())),
        plan_id,
        criteria,
        columns,
        format,
        beautify_links,
    };

    let source_path = args.source.clone().or_else(|| config.export.source.clone());
    let summary = if let Some(path) = source_path {
        debug!("Reading tasks from snapshot {}", path.display());
        let source = SnapshotSource::load(&path)?;
        let plan_label = args.plan.as_deref().or_else(|| source.plan_id()).unwrap_or_default();
        let plan_id = plan_id.or_else(|| source.plan_id().map(String::from)).unwrap_or_default();
        run_export(&source, &request(plan_id, plan_label))?
    } else {
        let Some(plan_id) = plan_id else {
            bail!("no plan given: pass --plan <name-or-id> or --source <snapshot.json>");
        };
        let source = remote_source()?;
        let plan_label = args.plan.as_deref().unwrap_or_default();
        run_export(source.as_ref(), &request(plan_id, plan_label))?
    };

    ExportResult::from(&summary).render(mode);
    Ok(())
}

fn criteria(args: &ExportArgs) -> anyhow::Result<FilterCriteria> {
    let mode: PullMode = args.mode.parse()?;
    let date_range = match (args.from.as_deref(), args.to.as_deref()) {
        (Some(from), Some(to)) => Some(DateRange::parse(from, to)?),
        (None, None) => None,
        _ => bail!("--from and --to must be given together"),
    };

    let criteria = FilterCriteria {
        mode,
        bucket_id: args.bucket.clone(),
        status: args.status.clone(),
        date_range,
    };
    criteria.validate()?;
    Ok(criteria)
}

#[cfg(feature = "graph")]
fn remote_source() -> anyhow::Result<Box<dyn PlannerSource>> {
    use anyhow::Context;

    let source = planex::adapters::graph::GraphSource::from_env()
        .context("cannot reach the remote board")?;
    Ok(Box::new(source))
}

#[cfg(not(feature = "graph"))]
fn remote_source() -> anyhow::Result<Box<dyn PlannerSource>> {
    bail!("no task source: pass --source <snapshot.json> (remote access needs the `graph` feature)")
}
