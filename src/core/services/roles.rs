//! Role assigner - derives contributor roles from assignment order

use std::collections::HashMap;

use crate::core::models::{Assignment, Role};

/// An assignment together with the role it earns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignedRole<'a> {
    /// The assignment
    pub assignment: &'a Assignment,
    /// The derived role
    pub role: Role,
}

/// Assign roles by assignment time
///
/// Returns the assignments sorted by timestamp (stable, so ties keep the
/// source's enumeration order). The first is the Main Contributor, the last
/// is the Reviewer when there is more than one, everyone else gets no role.
#[must_use]
pub fn assign_roles(assignments: &[Assignment]) -> Vec<AssignedRole<'_>> {
    let mut ordered: Vec<&Assignment> = assignments.iter().collect();
    ordered.sort_by_key(|a| a.assigned_at);

    let last = ordered.len().saturating_sub(1);
    ordered
        .into_iter()
        .enumerate()
        .map(|(position, assignment)| {
            let role = if position == 0 {
                Role::MainContributor
            } else if position == last {
                Role::Reviewer
            } else {
                Role::Participant
            };
            AssignedRole { assignment, role }
        })
        .collect()
}

/// Roles keyed by user identifier
#[must_use]
pub fn roles_by_user(assignments: &[Assignment]) -> HashMap<&str, Role> {
    assign_roles(assignments)
        .into_iter()
        .map(|assigned| (assigned.assignment.user_id.as_str(), assigned.role))
        .collect()
}
