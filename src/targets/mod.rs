//! targets
//!
//! Concrete handlers for each project kind.
//!
//! # Modules
//!
//! - [`options`] - Resolves bundler tasks from args, config, and defaults
//! - [`react_app`] - React applications
//! - [`web_app`] - Plain web applications
//! - [`react_component`] - Reusable React components (demo app + library build)
//!
//! Each kind contributes one serve handler and one build handler. The
//! polymorphic `serve` and `build` commands route between them with a
//! [`KindDispatcher`].

pub mod options;
pub mod react_app;
pub mod react_component;
pub mod web_app;

use std::sync::Arc;

use crate::engine::KindDispatcher;

/// Dispatcher over the serve handlers.
pub fn serve_dispatcher() -> KindDispatcher {
    KindDispatcher::new(
        "serve",
        Arc::new(react_app::ServeReactApp),
        Arc::new(web_app::ServeWebApp),
        Arc::new(react_component::ServeReactDemo),
    )
}

/// Dispatcher over the build handlers.
pub fn build_dispatcher() -> KindDispatcher {
    KindDispatcher::new(
        "build",
        Arc::new(react_app::BuildReactApp),
        Arc::new(web_app::BuildWebApp),
        Arc::new(react_component::BuildReactComponent),
    )
}
