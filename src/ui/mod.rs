//! ui
//!
//! Console output.
//!
//! # Modules
//!
//! - [`output`] - Console lines, their streams, and text styling
//!
//! # Design
//!
//! Nothing below the front controller writes to the terminal directly. The
//! controller collects [`output::ConsoleLine`]s and `main` emits them, so the
//! whole dispatch path can be tested without capturing process output.

pub mod output;
