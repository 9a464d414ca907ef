//! Planner source port
//!
//! Defines what the export pipeline needs from the remote board client.

use std::collections::BTreeSet;

use log::warn;

use crate::core::models::{Bucket, BucketLookup, Task, TaskDetails, UserLookup};

/// Source of board data for one plan
///
/// Implementations wrap the remote API client or an offline snapshot.
/// Every call is synchronous and may fail; the core decides which failures
/// are fatal.
pub trait PlannerSource {
    /// List every task of the plan
    fn list_tasks(&self, plan_id: &str) -> anyhow::Result<Vec<Task>>;

    /// List every bucket of the plan
    fn list_buckets(&self, plan_id: &str) -> anyhow::Result<Vec<Bucket>>;

    /// Fetch the detail object of a task
    fn task_details(&self, task_id: &str) -> anyhow::Result<TaskDetails>;

    /// Resolve a user's display name
    fn user_display_name(&self, user_id: &str) -> anyhow::Result<String>;

    /// Build the bucket lookup for a plan
    fn bucket_lookup(&self, plan_id: &str) -> anyhow::Result<BucketLookup> {
        Ok(self.list_buckets(plan_id)?.into_iter().map(|b| (b.id, b.name)).collect())
    }

    /// Build the user lookup for every assignee of the given tasks
    ///
    /// Users that cannot be resolved are left out of the lookup.
    fn user_lookup(&self, tasks: &[Task]) -> UserLookup {
        let user_ids: BTreeSet<&str> = tasks
            .iter()
            .flat_map(|t| t.assignments.iter().map(|a| a.user_id.as_str()))
            .collect();

        let mut lookup = UserLookup::with_capacity(user_ids.len());
        for user_id in user_ids {
            match self.user_display_name(user_id) {
                Ok(name) => {
                    lookup.insert(user_id.to_string(), name);
                },
                Err(err) => warn!("Could not resolve user {user_id}: {err:#}"),
            }
        }
        lookup
    }
}
