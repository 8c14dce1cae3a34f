//! rig - Build and serve React apps, web apps, and React components
//!
//! `rig` routes a command line to the right handler. Polymorphic commands
//! (`serve`, `build`) read the project's declared `type` from
//! `rig.config.toml` and hand off to the handler for that kind, which in turn
//! drives webpack.
//!
//! # Architecture
//!
//! - [`cli`] - Front controller, argument parsing, registry, help, error reporting
//! - [`engine`] - Handler traits, execution context, kind dispatch, handler runner
//! - [`targets`] - Concrete serve/build handlers per project kind
//! - [`bundler`] - Abstraction over the bundling toolchain (webpack)
//! - [`core`] - Domain types, error taxonomy, project configuration
//! - [`ui`] - Console lines and styling
//!
//! # Invariants
//!
//! 1. `version` and `help` are answered before any command is resolved
//! 2. Exactly one top-level handler runs per invocation
//! 3. Every failure exits 1; user errors never show a trace
//! 4. Only `main` writes to the terminal or exits the process

pub mod bundler;
pub mod cli;
pub mod core;
pub mod engine;
pub mod targets;
pub mod ui;
