//! Domain models for planex
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A board task with its assignments
//! - [`TaskDetails`] - The per-task detail object carrying [`Reference`]s
//! - [`ReportRow`] - One exported record, with its [`Role`] and [`Status`]
//! - [`Column`] - A selectable report field

mod row;
mod task;

pub use row::{
    Column, ERROR_ATTACHMENTS, ERROR_NAME, ReportRow, Role, Status, UNASSIGNED_NAME,
};
pub use task::{
    Assignment, Bucket, BucketLookup, Reference, Task, TaskDetails, User, UserLookup,
};
