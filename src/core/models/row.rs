//! Report row model
//!
//! One exported record: a task paired with one assignee, or a placeholder
//! row for unassigned and failed tasks.

/// Label used for the placeholder row of an unassigned task
pub const UNASSIGNED_NAME: &str = "Unassigned";

/// Name used for the row emitted when a task cannot be processed
pub const ERROR_NAME: &str = "Error Processing";

/// Attachments text of the row emitted when a task cannot be processed
pub const ERROR_ATTACHMENTS: &str = "Error retrieving details";

/// Role of an assignee, derived from assignment order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Earliest-assigned user
    MainContributor,
    /// Latest-assigned user, when more than one user is assigned
    Reviewer,
    /// Everyone else (rendered as an empty label)
    #[default]
    Participant,
}

impl Role {
    /// Label written to the report
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MainContributor => "Main Contributor",
            Self::Reviewer => "Reviewer",
            Self::Participant => "",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Completion status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// 0% complete
    NotStarted,
    /// Anything between 0% and 100%
    InProgress,
    /// 100% complete
    Completed,
    /// The task could not be processed
    Unknown,
}

impl Status {
    /// Derive the status from a completion percentage
    #[must_use]
    pub const fn from_percent(percent: u32) -> Self {
        match percent {
            0 => Self::NotStarted,
            100 => Self::Completed,
            _ => Self::InProgress,
        }
    }

    /// Label written to the report
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    /// Parses a filterable status label. `Unknown` is not filterable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "not started" => Ok(Self::NotStarted),
            "in progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid status: {s}. Use: Not Started, In Progress, Completed"
            )),
        }
    }
}

/// A field of the report, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Assignee display name
    Name,
    /// Assignee role
    Role,
    /// Task title
    Task,
    /// Bucket display name
    Bucket,
    /// Resolved external links
    Attachments,
    /// Status label
    Status,
}

impl Column {
    /// Every column, in canonical order
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Role,
        Self::Task,
        Self::Bucket,
        Self::Attachments,
        Self::Status,
    ];

    /// Header text of the column
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Role => "Role",
            Self::Task => "Task",
            Self::Bucket => "Bucket",
            Self::Attachments => "Attachments",
            Self::Status => "Status",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

impl std::str::FromStr for Column {
    type Err = String;

    /// Parses a column by header name (case-insensitive) or 1-based position
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(position) = s.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|index| Self::ALL.get(index).copied())
                .ok_or_else(|| format!("Invalid column: {s}"));
        }
        Self::ALL
            .into_iter()
            .find(|column| column.header().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid column: {s}"))
    }
}

/// One exported record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Assignee display name, or a placeholder name
    pub name: String,
    /// Assignee role
    pub role: Role,
    /// Task title
    pub task: String,
    /// Bucket display name (empty when the bucket is unknown)
    pub bucket: String,
    /// Resolved references
    pub attachments: String,
    /// Task status
    pub status: Status,
}

impl ReportRow {
    /// Placeholder row for a task nobody is assigned to
    #[must_use]
    pub fn unassigned(task: &str, bucket: &str, attachments: String, status: Status) -> Self {
        Self {
            name: UNASSIGNED_NAME.to_string(),
            role: Role::Participant,
            task: task.to_string(),
            bucket: bucket.to_string(),
            attachments,
            status,
        }
    }

    /// Row emitted in place of a task that failed to process
    #[must_use]
    pub fn error_processing(task: &str, bucket: &str) -> Self {
        Self {
            name: ERROR_NAME.to_string(),
            role: Role::Participant,
            task: task.to_string(),
            bucket: bucket.to_string(),
            attachments: ERROR_ATTACHMENTS.to_string(),
            status: Status::Unknown,
        }
    }

    /// Whether this row stands in for a failed task
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.name == ERROR_NAME && self.status == Status::Unknown
    }

    /// Text of a single field
    #[must_use]
    pub fn value(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Role => self.role.label(),
            Column::Task => &self.task,
            Column::Bucket => &self.bucket,
            Column::Attachments => &self.attachments,
            Column::Status => self.status.label(),
        }
    }
}
