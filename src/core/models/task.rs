//! Board task model
//!
//! Raw snapshot types as supplied by a planner source. Field names follow
//! the Microsoft Graph planner resources so a Graph response and an offline
//! snapshot deserialize into the same types. The core never mutates them.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Bucket identifier to bucket display name
pub type BucketLookup = HashMap<String, String>;

/// User identifier to user display name
pub type UserLookup = HashMap<String, String>;

/// A task on the board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Remote task identifier
    pub id: String,

    /// Task title
    pub title: String,

    /// Identifier of the bucket holding the task
    #[serde(default)]
    pub bucket_id: String,

    /// Completion percentage (0-100)
    #[serde(default)]
    pub percent_complete: u32,

    /// Assignments in the order the source enumerated them
    #[serde(default, deserialize_with = "assignments_in_order")]
    pub assignments: Vec<Assignment>,
}

/// A user assigned to a task at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Remote user identifier
    pub user_id: String,

    /// When the user was assigned
    pub assigned_at: DateTime<Utc>,
}

/// Per-task detail object, fetched separately from the task list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskDetails {
    /// External references; `None` when the source sent no reference map
    #[serde(default, deserialize_with = "references_in_order")]
    pub references: Option<Vec<Reference>>,
}

/// An external link attached to a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// URL-encoded link, as used for the key of the remote reference map
    pub key: String,

    /// Optional human-readable alias
    pub alias: Option<String>,
}

/// A bucket (column) of the board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Bucket {
    /// Remote bucket identifier
    pub id: String,

    /// Display name
    pub name: String,
}

/// A user known to the board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Remote user identifier
    pub id: String,

    /// Display name
    pub display_name: String,
}

impl Task {
    /// Create an unassigned task
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        bucket_id: impl Into<String>,
        percent_complete: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            bucket_id: bucket_id.into(),
            percent_complete,
            assignments: Vec::new(),
        }
    }

    /// Append an assignment, keeping enumeration order
    #[must_use]
    pub fn with_assignment(mut self, user_id: impl Into<String>, assigned_at: DateTime<Utc>) -> Self {
        self.assignments.push(Assignment::new(user_id, assigned_at));
        self
    }

    /// Whether anyone is assigned
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !self.assignments.is_empty()
    }
}

impl Assignment {
    /// Create an assignment
    #[must_use]
    pub fn new(user_id: impl Into<String>, assigned_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            assigned_at,
        }
    }
}

impl Reference {
    /// Create a reference from its encoded key and optional alias
    #[must_use]
    pub fn new(key: impl Into<String>, alias: Option<&str>) -> Self {
        Self {
            key: key.into(),
            alias: alias.map(String::from),
        }
    }
}

impl TaskDetails {
    /// Details carrying the given references
    #[must_use]
    pub const fn with_references(references: Vec<Reference>) -> Self {
        Self {
            references: Some(references),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssignment {
    assigned_date_time: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawReference {
    #[serde(default)]
    alias: Option<String>,
}

fn assignments_in_order<'de, D>(deserializer: D) -> Result<Vec<Assignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = deserializer.deserialize_any(OrderedEntries::<RawAssignment>::new())?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|(user_id, raw)| Assignment::new(user_id, raw.assigned_date_time))
        .collect())
}

fn references_in_order<'de, D>(deserializer: D) -> Result<Option<Vec<Reference>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = deserializer.deserialize_any(OrderedEntries::<RawReference>::new())?;
    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .map(|(key, raw)| Reference {
                key,
                alias: raw.alias,
            })
            .collect()
    }))
}

/// Reads a JSON object into `(key, value)` pairs without losing key order.
///
/// `null` yields `None`.
struct OrderedEntries<V>(PhantomData<V>);

impl<V> OrderedEntries<V> {
    const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<'de, V> Visitor<'de> for OrderedEntries<V>
where
    V: Deserialize<'de>,
{
    type Value = Option<Vec<(String, V)>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object or null")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(Some(entries))
    }
}
