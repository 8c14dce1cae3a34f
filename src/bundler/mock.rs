//! bundler::mock
//!
//! Mock bundler implementation for deterministic testing.
//!
//! # Design
//!
//! The mock bundler records every task it receives and can be configured to
//! fail a specific operation. Clones share state, so a test can keep one
//! handle while the context owns another.
//!
//! # Example
//!
//! ```
//! use rig::bundler::mock::{MockBundler, MockOperation};
//! use rig::bundler::{BuildTask, Bundler, HtmlOptions};
//! use rig::core::types::ProjectKind;
//!
//! # tokio_test::block_on(async {
//! let bundler = MockBundler::new();
//!
//! bundler.build(&BuildTask {
//!     kind: ProjectKind::WebApp,
//!     entry: "src/index.js".to_string(),
//!     dist_dir: "dist".to_string(),
//!     html: HtmlOptions { title: "Site".to_string(), mount_id: "app".to_string() },
//!     vendor: false,
//! }).await.unwrap();
//!
//! assert!(matches!(bundler.operations()[0], MockOperation::Build(_)));
//! # });
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{BuildTask, Bundler, BundlerError, ServeTask};

/// Mock bundler for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockBundler {
    inner: Arc<Mutex<MockBundlerInner>>,
}

#[derive(Debug, Default)]
struct MockBundlerInner {
    fail_on: Option<FailOn>,
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail build with the given error.
    Build(BundlerError),
    /// Fail serve with the given error.
    Serve(BundlerError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    Build(BuildTask),
    Serve(ServeTask),
}

impl MockBundler {
    /// Create a new mock bundler that succeeds at everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail on a specific operation.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Recorded builds, in order.
    pub fn builds(&self) -> Vec<BuildTask> {
        self.operations()
            .into_iter()
            .filter_map(|op| match op {
                MockOperation::Build(task) => Some(task),
                MockOperation::Serve(_) => None,
            })
            .collect()
    }

    /// Recorded serves, in order.
    pub fn serves(&self) -> Vec<ServeTask> {
        self.operations()
            .into_iter()
            .filter_map(|op| match op {
                MockOperation::Serve(task) => Some(task),
                MockOperation::Build(_) => None,
            })
            .collect()
    }

    fn record(&self, op: MockOperation) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
    }

    fn check_fail(&self, build: bool) -> Result<(), BundlerError> {
        let inner = self.inner.lock().unwrap();
        match &inner.fail_on {
            Some(FailOn::Build(e)) if build => Err(e.clone()),
            Some(FailOn::Serve(e)) if !build => Err(e.clone()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Bundler for MockBundler {
    fn name(&self) -> &str {
        "mock"
    }

    async fn build(&self, task: &BuildTask) -> Result<(), BundlerError> {
        self.record(MockOperation::Build(task.clone()));
        self.check_fail(true)
    }

    async fn serve(&self, task: &ServeTask) -> Result<(), BundlerError> {
        self.record(MockOperation::Serve(task.clone()));
        self.check_fail(false)
    }
}
