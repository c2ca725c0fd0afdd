/// Receives per-iteration solver events and may steer the iteration.
///
/// Observers let callers watch a solver without changing its API: logging,
/// recording iterates for a plot, or stopping once an answer is good enough.
///
/// `observe` returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver carry on.
///
/// Closures implement `Observer`, and `()` is a no-op observer that always
/// returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
