//! Executable training op handles and the shared global step.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::generative::gan::error::Result;

type OpFn = dyn Fn() -> Result<()> + Send + Sync;

/// Named update operation (an optimizer step, a counter increment).
///
/// Two handles are equal only if they wrap the same op.
#[derive(Clone)]
pub struct TrainOp {
    name: Arc<str>,
    op: Arc<OpFn>,
}

impl TrainOp {
    pub fn new<F>(name: impl Into<Arc<str>>, op: F) -> Self
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        Self { name: name.into(), op: Arc::new(op) }
    }

    /// Op that does nothing, used when a component is not trained
    pub fn noop(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, || Ok(()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute the op once
    pub fn run(&self) -> Result<()> {
        tracing::debug!(op = %self.name, "running train op");
        (self.op)().inspect_err(|e| {
            tracing::warn!(op = %self.name, error = %e, "train op failed");
        })
    }
}

impl PartialEq for TrainOp {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.op, &other.op)
    }
}

impl fmt::Debug for TrainOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TrainOp").field(&self.name).finish()
    }
}

/// Training step counter shared by every op that advances it
#[derive(Debug, Clone, Default)]
pub struct GlobalStep {
    counter: Arc<AtomicU64>,
}

impl GlobalStep {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Op that adds one to the counter each time it runs
    #[must_use]
    pub fn increment_op(&self) -> TrainOp {
        let counter = Arc::clone(&self.counter);
        TrainOp::new("global_step_inc", move || {
            let step = counter.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::trace!(step, "global step incremented");
            Ok(())
        })
    }
}
