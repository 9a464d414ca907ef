//! Plan command - manage named plans

use planex::config::GlobalConfig;
use planex::output::{OperationResult, OutputMode, PlanInfo, PlanListResult};

use crate::cli::PlanAction;

/// Handle plan subcommands
pub fn plan_cmd(action: PlanAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        PlanAction::Add { name, id } => add(&name, &id, mode),
        PlanAction::List => list(mode),
        PlanAction::Remove { name } => remove(&name, mode),
    }
}

fn add(name: &str, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = GlobalConfig::load();
    let previous = config.add_plan(name, id);
    config.save()?;

    let message = match previous {
        Some(old) if old != id => format!("Updated plan {name}: {old} -> {id}"),
        Some(_) => format!("Plan {name} unchanged"),
        None => format!("Added plan {name}: {id}"),
    };
    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}

fn list(mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    PlanListResult {
        plans: config
            .plans
            .into_iter()
            .map(|(name, id)| PlanInfo { name, id })
            .collect(),
    }
    .render(mode);
    Ok(())
}

fn remove(name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = GlobalConfig::load();
    if !config.remove_plan(name) {
        anyhow::bail!("no plan named '{name}'");
    }
    config.save()?;

    OperationResult {
        success: true,
        message: format!("Removed plan {name}"),
    }
    .render(mode);
    Ok(())
}
