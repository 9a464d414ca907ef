//! Offline snapshot source
//!
//! Implements `PlannerSource` over a JSON dump of one plan. The dump uses the
//! Microsoft Graph planner field names:
//!
//! ```json
//! {
//!   "planId": "plan-1",
//!   "buckets": [{ "id": "b1", "name": "Doing" }],
//!   "users": [{ "id": "u1", "displayName": "Alice" }],
//!   "tasks": [{
//!     "id": "t1", "title": "Build", "bucketId": "b1", "percentComplete": 50,
//!     "assignments": { "u1": { "assignedDateTime": "2025-01-02T09:00:00Z" } }
//!   }],
//!   "details": {
//!     "t1": { "references": { "https%3A//github%2Ecom/o/r/pull/1": { "alias": "PR 1" } } }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow, bail};
use serde::Deserialize;

use crate::core::models::{Bucket, Task, TaskDetails, User};
use crate::core::ports::PlannerSource;

/// Contents of a snapshot file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Plan the snapshot was taken from
    #[serde(default)]
    pub plan_id: Option<String>,
    /// Buckets of the plan
    #[serde(default)]
    pub buckets: Vec<Bucket>,
    /// Users referenced by assignments
    #[serde(default)]
    pub users: Vec<User>,
    /// Tasks of the plan
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Task details keyed by task id
    #[serde(default)]
    pub details: HashMap<String, TaskDetails>,
}

/// `PlannerSource` backed by a snapshot
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    /// Wrap an in-memory snapshot
    #[must_use]
    pub const fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Read a snapshot file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid snapshot {}", path.display()))
    }

    /// Parse a snapshot from JSON text
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(Self::new(serde_json::from_str(content)?))
    }

    /// Plan the snapshot was taken from, if recorded
    #[must_use]
    pub fn plan_id(&self) -> Option<&str> {
        self.snapshot.plan_id.as_deref()
    }

    fn check_plan(&self, plan_id: &str) -> anyhow::Result<()> {
        match self.plan_id() {
            Some(recorded) if !plan_id.is_empty() && recorded != plan_id => {
                bail!("snapshot holds plan '{recorded}', not '{plan_id}'")
            },
            _ => Ok(()),
        }
    }
}

impl PlannerSource for SnapshotSource {
    fn list_tasks(&self, plan_id: &str) -> anyhow::Result<Vec<Task>> {
        self.check_plan(plan_id)?;
        Ok(self.snapshot.tasks.clone())
    }

    fn list_buckets(&self, plan_id: &str) -> anyhow::Result<Vec<Bucket>> {
        self.check_plan(plan_id)?;
        Ok(self.snapshot.buckets.clone())
    }

    fn task_details(&self, task_id: &str) -> anyhow::Result<TaskDetails> {
        self.snapshot
            .details
            .get(task_id)
            .cloned()
            .ok_or_else(|| anyhow!("no details recorded for task '{task_id}'"))
    }

    fn user_display_name(&self, user_id: &str) -> anyhow::Result<String> {
        self.snapshot
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.display_name.clone())
            .ok_or_else(|| anyhow!("user '{user_id}' not in snapshot"))
    }
}
