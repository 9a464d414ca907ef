//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the export pipeline and the
//! remote board service. Implementations live in the `adapters` module.

mod planner_source;

pub use planner_source::PlannerSource;
