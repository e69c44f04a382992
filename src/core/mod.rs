//! Core module - Shared data structures and plumbing
//!
//! This module provides:
//! - The error taxonomy
//! - Anchor records and the identifier map
//! - File reading with encoding detection
//! - Diagnostic logging setup

pub mod error;
pub mod file_reader;
pub mod logging;
pub mod model;
