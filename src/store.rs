//! Centralized state store with an effect-aware reducer.
//!
//! The reducer returns [`DispatchResult`]: whether the state changed (and a
//! re-render is needed) plus any effects for the run loop to execute.

use std::fmt::Debug;
use std::marker::PhantomData;

/// Contract for dispatchable values.
///
/// Actions may be logged and sent across tasks, hence the bounds. `name()`
/// feeds structured dispatch logging.
pub trait Action: Clone + Debug + Send + 'static {
    fn name(&self) -> &'static str;
}

/// Outcome of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified.
    pub changed: bool,
    /// Effects to execute after dispatch.
    pub effects: Vec<E>,
}

impl<E> DispatchResult<E> {
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

/// A pure reducer that may emit effects.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// State container; the single point of mutation.
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A: Action, E> EffectStore<S, A, E> {
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Direct state access; initialization only, everything else goes
    /// through actions.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}

/// Hook for intercepting dispatches (logging and the like).
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);
    fn after(&mut self, action: &A, state_changed: bool);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Logs every dispatch through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        tracing::debug!(action = %action.name(), "dispatching");
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = %action.name(), state_changed, "dispatched");
    }
}

/// [`EffectStore`] wrapped with a middleware.
pub struct EffectStoreWithMiddleware<S, A: Action, E, M: Middleware<A>> {
    store: EffectStore<S, A, E>,
    middleware: M,
}

impl<S, A: Action, E, M: Middleware<A>> EffectStoreWithMiddleware<S, A, E, M> {
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: EffectStore::new(state, reducer),
            middleware,
        }
    }

    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        value: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum CounterAction {
        Add(i32),
        Announce,
    }

    impl Action for CounterAction {
        fn name(&self) -> &'static str {
            match self {
                CounterAction::Add(_) => "Add",
                CounterAction::Announce => "Announce",
            }
        }
    }

    fn reducer(state: &mut Counter, action: CounterAction) -> DispatchResult<String> {
        match action {
            CounterAction::Add(n) => {
                state.value += n;
                DispatchResult::changed()
            }
            CounterAction::Announce => {
                DispatchResult::changed_with(format!("value is {}", state.value))
            }
        }
    }

    #[test]
    fn dispatch_runs_the_reducer() {
        let mut store = EffectStore::new(Counter::default(), reducer);

        let result = store.dispatch(CounterAction::Add(2));
        assert!(result.changed);
        assert!(!result.has_effects());
        assert_eq!(store.state().value, 2);
    }

    #[test]
    fn dispatch_surfaces_effects() {
        let mut store = EffectStore::new(Counter::default(), reducer);
        store.dispatch(CounterAction::Add(5));

        let result = store.dispatch(CounterAction::Announce);
        assert_eq!(result.effects, vec!["value is 5".to_owned()]);
    }

    #[derive(Default)]
    struct CountingMiddleware {
        seen: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {}

        fn after(&mut self, _action: &A, _state_changed: bool) {
            self.seen += 1;
        }
    }

    #[test]
    fn middleware_observes_every_dispatch() {
        let mut store = EffectStoreWithMiddleware::new(
            Counter::default(),
            reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(CounterAction::Add(1));
        store.dispatch(CounterAction::Add(1));

        assert_eq!(store.middleware.seen, 2);
        assert_eq!(store.state().value, 2);
    }
}
