//! Record builder - expands filtered tasks into report rows
//!
//! Each task is processed on its own: a failing detail fetch turns that task
//! into a single error row and the run goes on with the next task.

use log::{debug, error};

use super::filter::{FilterCriteria, filter_tasks};
use super::references::resolve_references;
use super::roles::assign_roles;
use crate::core::models::{BucketLookup, ReportRow, Status, Task, UserLookup};
use crate::core::ports::PlannerSource;

const UNRESOLVED_MARKER: &str = "unable to resolve";

/// Build the report rows for a plan
///
/// Rows are sorted by name (stable, so rows of one name keep task order and
/// assignment order).
pub fn build_rows<S>(
    tasks: &[Task],
    buckets: &BucketLookup,
    users: &UserLookup,
    source: &S,
    criteria: &FilterCriteria,
) -> Vec<ReportRow>
where
    S: PlannerSource + ?Sized,
{
    let mut rows = Vec::new();
    for task in filter_tasks(tasks, criteria) {
        let bucket = buckets.get(&task.bucket_id).map_or("", String::as_str);
        match task_rows(task, bucket, users, source, criteria) {
            Ok(task_rows) => rows.extend(task_rows),
            Err(err) => {
                error!("Failed to process task {} ({}): {err:#}", task.id, task.title);
                rows.push(ReportRow::error_processing(&task.title, bucket));
            },
        }
    }

    rows.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Built {} row(s)", rows.len());
    rows
}

/// Display name of a user, or a marked fallback when the lookup misses
#[must_use]
pub fn display_name(users: &UserLookup, user_id: &str) -> String {
    users
        .get(user_id)
        .cloned()
        .unwrap_or_else(|| format!("{user_id} ({UNRESOLVED_MARKER})"))
}

fn task_rows<S>(
    task: &Task,
    bucket: &str,
    users: &UserLookup,
    source: &S,
    criteria: &FilterCriteria,
) -> anyhow::Result<Vec<ReportRow>>
where
    S: PlannerSource + ?Sized,
{
    let details = source.task_details(&task.id)?;
    let attachments = resolve_references(details.references.as_deref());
    let status = Status::from_percent(task.percent_complete);

    if !task.is_assigned() {
        if criteria.mode.includes_unassigned() {
            return Ok(vec![ReportRow::unassigned(&task.title, bucket, attachments, status)]);
        }
        return Ok(Vec::new());
    }

    Ok(assign_roles(&task.assignments)
        .into_iter()
        .filter(|assigned| criteria.keeps_assignment(assigned.assignment))
        .map(|assigned| ReportRow {
            name: display_name(users, &assigned.assignment.user_id),
            role: assigned.role,
            task: task.title.clone(),
            bucket: bucket.to_string(),
            attachments: attachments.clone(),
            status,
        })
        .collect())
}
