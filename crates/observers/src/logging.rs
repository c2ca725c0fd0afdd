use log::debug;
use rootfind_core::Observer;

use crate::traits::HasIterate;

/// An observer that logs every iteration at `debug` level.
///
/// Each line is prefixed with the label given to [`LogObserver::new`], so the
/// output of several solvers run one after another stays readable. Nothing is
/// formatted unless `debug` logging is enabled for this crate.
///
/// The observer never returns an action, so it can watch any solver whose
/// events implement [`HasIterate`].
///
/// # Example
///
/// ```
/// use rootfind_core::Cubic;
/// use rootfind_observers::LogObserver;
/// use rootfind_solvers::secant;
///
/// let observer = LogObserver::new("Secant");
/// let solution =
///     secant::solve(&Cubic, [1.0, 2.0], &secant::Config::default(), observer).unwrap();
///
/// assert!(solution.converged());
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
}

impl LogObserver {
    /// Creates an observer that tags its log lines with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the label used in log lines.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<E: HasIterate, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        debug!(
            "{}: iter {:>2}  x = {:<22}  f(x) = {:e}",
            self.label,
            event.iter(),
            event.x(),
            event.residual(),
        );
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer
/// by value, so one observer can be reused across several solves.
impl<E: HasIterate, A> Observer<E, A> for &mut LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
