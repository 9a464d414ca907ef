//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. Only the
//! exporter, the beautifier and the pipeline touch the filesystem.
//!
//! - [`references`] - Resolve a task's reference map into link text
//! - [`roles`] - Derive roles from assignment order
//! - [`filter`] - Task and assignment predicates
//! - [`builder`] - Expand tasks into report rows
//! - [`projector`] - Select report columns
//! - [`exporter`] - Render CSV, JSON and Markdown
//! - [`beautifier`] - Turn pull-request URLs into Markdown links
//! - [`pipeline`] - Wire all of the above for one request

pub mod beautifier;
pub mod builder;
pub mod exporter;
pub mod filter;
pub mod pipeline;
pub mod projector;
pub mod references;
pub mod roles;

pub use beautifier::{beautify_file, beautify_links, pull_request_urls};
pub use builder::{build_rows, display_name};
pub use exporter::{ExportFormat, export, render, render_csv, render_json, render_markdown};
pub use filter::{DateRange, FilterCriteria, PullMode, filter_tasks, parse_date};
pub use pipeline::{ExportRequest, ExportSummary, collect_rows, run_export};
pub use projector::{ProjectedRow, effective_columns, parse_columns, project};
pub use references::{NO_GITHUB_LINKS, NO_REFERENCES, resolve_references};
pub use roles::{AssignedRole, assign_roles, roles_by_user};
