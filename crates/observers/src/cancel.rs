use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use nlsolve_core::Observer;

use crate::traits::CanStopEarly;

/// Cooperative cancellation shared between a running solver and other threads.
///
/// Clones share one flag. Hand a clone to the solver as its observer and call
/// [`cancel`](Self::cancel) from anywhere; the solver stops at its next event
/// and reports that it was stopped by the observer.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
}

impl Cancellation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that every solver observing this token stop.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Cancellation {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}
