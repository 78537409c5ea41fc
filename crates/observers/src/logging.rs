use std::fmt::Debug;

use log::{Level, log, log_enabled};
use nlsolve_core::Observer;

/// Logs every solver event through the [`log`] facade.
///
/// Works with any solver whose events implement [`Debug`], and never
/// requests an action. Nothing is printed unless the application installs a
/// logger that accepts the configured level.
///
/// ```rust
/// use nlsolve_observers::LogObserver;
/// use nlsolve_solvers::equation::bisection;
///
/// let observer = LogObserver::new("sqrt2").with_level(log::Level::Trace);
/// let f = |x: f64| x * x - 2.0;
/// let solution = bisection::solve(&f, [0.0, 2.0], &bisection::Config::default(), observer)?;
/// assert_eq!(solution.status, bisection::Status::Converged);
/// # Ok::<(), bisection::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogObserver {
    label: String,
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at [`Level::Debug`] with `label` as a prefix.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: Level::Debug,
        }
    }

    /// Sets the level events are logged at.
    #[must_use]
    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E: Debug, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        if log_enabled!(self.level) {
            log!(self.level, "{}: {event:?}", self.label);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use log::{LevelFilter, Metadata, Record};
    use nlsolve_solvers::equation::bisection;

    /// Collects formatted messages so tests can inspect them.
    struct Capture(Mutex<Vec<(Level, String)>>);

    impl log::Log for Capture {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut messages) = self.0.lock() {
                messages.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn logs_each_event_with_label() {
        // Only the first install in this test binary succeeds.
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);

        let observer = LogObserver::new("half").with_level(Level::Info);
        let f = |x: f64| x - 0.5;
        let solution = bisection::solve(&f, [0.0, 1.0], &bisection::Config::default(), observer)
            .expect("solves");
        assert_eq!(solution.iters, 1);

        let messages = CAPTURE.0.lock().expect("not poisoned");
        let ours: Vec<_> = messages
            .iter()
            .filter(|(_, message)| message.starts_with("half: "))
            .collect();

        assert_eq!(ours.len(), 1);
        assert_eq!(ours[0].0, Level::Info);
        assert!(ours[0].1.contains("iter: 1"));
    }

    #[test]
    fn builder_sets_level() {
        let observer = LogObserver::new("x");
        assert_eq!(observer.level(), Level::Debug);
        assert_eq!(observer.label(), "x");
        assert_eq!(observer.with_level(Level::Warn).level(), Level::Warn);
    }
}
