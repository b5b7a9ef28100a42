//! Common types and utilities shared across CampusDB.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (StudentId)

pub mod config;
pub mod error;
mod student_id;

pub use error::{Error, Result};
pub use student_id::StudentId;
