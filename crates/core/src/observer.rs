/// Receives per-iteration solver events and may steer the iteration.
///
/// Observers are how callers watch a solver run: logging progress, recording
/// a convergence history, or cutting a run short once the answer is good
/// enough for their purpose.
///
/// `observe` returns `Some(action)` to request a solver-specific action, or
/// `None` to let the solver continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer
/// that never acts.
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
