//! Filter engine - selects the tasks an export covers
//!
//! Task-level predicates (bucket, status, pull mode) run before rows are
//! built. The date range works per assignment and is applied by the record
//! builder through [`FilterCriteria::keeps_assignment`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::{debug, warn};

use crate::core::error::CriteriaError;
use crate::core::models::{Assignment, Status, Task};

/// Top-level retrieval strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullMode {
    /// Every task, with a placeholder row for unassigned ones
    #[default]
    All,
    /// Only tasks somebody is assigned to
    AssignedOnly,
    /// Only assignments made within a date range
    DateRange,
    /// Only tasks of one bucket
    Bucket,
    /// Only tasks with one status
    Status,
}

impl PullMode {
    /// Whether unassigned tasks produce a placeholder row
    #[must_use]
    pub const fn includes_unassigned(self) -> bool {
        matches!(self, Self::All)
    }
}

impl std::fmt::Display for PullMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::AssignedOnly => write!(f, "assigned-only"),
            Self::DateRange => write!(f, "date-range"),
            Self::Bucket => write!(f, "bucket"),
            Self::Status => write!(f, "status"),
        }
    }
}

impl std::str::FromStr for PullMode {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "all" => Ok(Self::All),
            "assigned-only" | "assigned" => Ok(Self::AssignedOnly),
            "date-range" | "date" | "dates" => Ok(Self::DateRange),
            "bucket" => Ok(Self::Bucket),
            "status" => Ok(Self::Status),
            _ => Err(CriteriaError::InvalidMode(s.to_string())),
        }
    }
}

/// Half-open time range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive start
    pub start: DateTime<Utc>,
    /// Exclusive end
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Create a range, rejecting empty ones
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, CriteriaError> {
        if start >= end {
            return Err(CriteriaError::EmptyRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse a range from two user-supplied dates
    pub fn parse(start: &str, end: &str) -> Result<Self, CriteriaError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Whether a timestamp falls inside the range
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// Parse a user-supplied date
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS` (taken as UTC) and `YYYY-MM-DD`
/// (UTC midnight).
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, CriteriaError> {
    let input = input.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(at.with_timezone(&Utc));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(at.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| CriteriaError::InvalidDate(input.to_string()))
}

/// Everything that narrows an export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Pull mode
    pub mode: PullMode,
    /// Keep only tasks of this bucket
    pub bucket_id: Option<String>,
    /// Keep only tasks with this status label
    ///
    /// Unrecognized labels disable the filter.
    pub status: Option<String>,
    /// Keep only assignments made within this range
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    /// Criteria for a pull mode with no further filters
    #[must_use]
    pub fn for_mode(mode: PullMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Check that the pull mode has the arguments it needs
    pub fn validate(&self) -> Result<(), CriteriaError> {
        let missing = match self.mode {
            PullMode::DateRange if self.date_range.is_none() => Some("a date range (--from/--to)"),
            PullMode::Bucket if self.bucket_id.is_none() => Some("a bucket id (--bucket)"),
            PullMode::Status if self.status.is_none() => Some("a status label (--status)"),
            _ => None,
        };
        missing.map_or(Ok(()), |argument| {
            Err(CriteriaError::MissingArgument {
                mode: self.mode.to_string(),
                argument,
            })
        })
    }

    /// The status filter in effect, if the label is recognized
    #[must_use]
    pub fn status_filter(&self) -> Option<Status> {
        let label = self.status.as_deref()?;
        match label.parse() {
            Ok(status) => Some(status),
            Err(_) => {
                warn!("Unrecognized status '{label}', status filter not applied");
                None
            },
        }
    }

    /// Whether a task passes the task-level predicates
    #[must_use]
    pub fn keeps_task(&self, task: &Task, status: Option<Status>) -> bool {
        if !self.mode.includes_unassigned() && !task.is_assigned() {
            return false;
        }
        if self.bucket_id.as_ref().is_some_and(|bucket| *bucket != task.bucket_id) {
            return false;
        }
        status.is_none_or(|status| Status::from_percent(task.percent_complete) == status)
    }

    /// Whether an assignment passes the date range
    #[must_use]
    pub fn keeps_assignment(&self, assignment: &Assignment) -> bool {
        self.date_range.is_none_or(|range| range.contains(assignment.assigned_at))
    }
}

/// Apply the task-level predicates
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    let status = criteria.status_filter();
    let kept: Vec<&Task> = tasks.iter().filter(|t| criteria.keeps_task(t, status)).collect();
    debug!("Filter kept {} of {} task(s) in {} mode", kept.len(), tasks.len(), criteria.mode);
    kept
}
