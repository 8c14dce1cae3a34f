//! core
//!
//! Core domain types, errors, and configuration for rig.
//!
//! # Modules
//!
//! - [`types`] - Strong types: CommandName, ProjectKind
//! - [`error`] - The user/internal error taxonomy
//! - [`config`] - Project configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing keeps the set of project kinds closed
//! - Schemas are strict and self-describing
//! - Nothing here performs process-level side effects

pub mod config;
pub mod error;
pub mod types;
