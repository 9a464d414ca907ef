//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `snapshot/` - JSON snapshot of one plan (offline source)
//! - `graph/` - Microsoft Graph planner API (feature `graph`)

#[cfg(feature = "graph")]
pub mod graph;
pub mod snapshot;
