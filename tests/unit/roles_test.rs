//! Tests for role assignment
//!
//! Roles come only from assignment order: earliest is Main Contributor,
//! latest is Reviewer.

use planex::core::models::{Assignment, Role};
use planex::core::services::{assign_roles, roles_by_user};

use crate::common::tick;

#[test]
fn three_users_get_main_contributor_nothing_and_reviewer() {
    let assignments = [
        Assignment::new("A", tick(1)),
        Assignment::new("B", tick(2)),
        Assignment::new("C", tick(3)),
    ];
    let roles = roles_by_user(&assignments);
    assert_eq!(roles["A"], Role::MainContributor);
    assert_eq!(roles["B"], Role::Participant);
    assert_eq!(roles["C"], Role::Reviewer);
    assert_eq!(roles["B"].label(), "");
}

#[test]
fn sole_assignee_is_never_reviewer() {
    let assignments = [Assignment::new("solo", tick(9))];
    let ordered = assign_roles(&assignments);
    assert_eq!(ordered.len(), 1);
    assert_eq!(ordered[0].role, Role::MainContributor);
}

#[test]
fn two_users_split_the_roles() {
    let assignments = [Assignment::new("late", tick(20)), Assignment::new("early", tick(10))];
    let roles = roles_by_user(&assignments);
    assert_eq!(roles["early"], Role::MainContributor);
    assert_eq!(roles["late"], Role::Reviewer);
}

#[test]
fn middle_ties_keep_source_order() {
    let assignments = [
        Assignment::new("first", tick(1)),
        Assignment::new("tie-a", tick(5)),
        Assignment::new("tie-b", tick(5)),
        Assignment::new("last", tick(9)),
    ];
    let users: Vec<&str> =
        assign_roles(&assignments).iter().map(|a| a.assignment.user_id.as_str()).collect();
    assert_eq!(users, ["first", "tie-a", "tie-b", "last"]);
}
