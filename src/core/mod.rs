//! Core domain logic for planex
//!
//! This module contains the record-building and export pipeline.
//! All interaction with the remote board is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Assignment, Reference, ReportRow)
//! - `services/` - Filtering, row building, projection and rendering
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Errors that abort an export

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
