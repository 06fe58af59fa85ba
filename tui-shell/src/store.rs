//! Effect-aware state store with reducer pattern
//!
//! Reducers are pure: they mutate state and *describe* side effects, they
//! never perform them. The runtime hands the returned effects to the app's
//! effect handler after each dispatch.

use std::marker::PhantomData;

use crate::action::Action;

/// Result of dispatching an action.
///
/// Carries the re-render indicator plus any effects the reducer declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// State changed with multiple effects.
    #[inline]
    pub fn changed_with_many(effects: Vec<E>) -> Self {
        Self {
            changed: true,
            effects,
        }
    }

    /// Append an effect to this result.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the changed flag.
    #[inline]
    pub fn mark_changed(mut self) -> Self {
        self.changed = true;
        self
    }

    /// Whether there are effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer function: mutates state, reports the change, declares effects.
pub type Reducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Centralized state store.
///
/// Every dispatch is traced with the action name and change indicator, so
/// `RUST_LOG=tui_shell=debug` yields an action log.
pub struct Store<S, A: Action, E> {
    state: S,
    reducer: Reducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A: Action, E> Store<S, A, E> {
    /// Create a store with initial state and reducer.
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Dispatch an action through the reducer.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        let name = action.name();
        let result = (self.reducer)(&mut self.state, action);
        tracing::debug!(
            action = name,
            changed = result.changed,
            effects = result.effects.len(),
            "dispatched"
        );
        result
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable state access. Prefer dispatching actions; this exists for
    /// initialization.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestState {
        counter: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
        TriggerEffect,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Increment => "Increment",
                TestAction::Decrement => "Decrement",
                TestAction::NoOp => "NoOp",
                TestAction::TriggerEffect => "TriggerEffect",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEffect {
        Log(String),
        Save,
    }

    fn test_reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Increment => {
                state.counter += 1;
                DispatchResult::changed()
            }
            TestAction::Decrement => {
                state.counter -= 1;
                DispatchResult::changed_with(TestEffect::Log(format!("count: {}", state.counter)))
            }
            TestAction::NoOp => DispatchResult::unchanged(),
            TestAction::TriggerEffect => DispatchResult::effect(TestEffect::Save),
        }
    }

    #[test]
    fn dispatch_updates_state() {
        let mut store = Store::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::Increment);
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(store.state().counter, 1);

        let result = store.dispatch(TestAction::NoOp);
        assert!(!result.changed);
        assert_eq!(store.state().counter, 1);
    }

    #[test]
    fn dispatch_returns_effects() {
        let mut store = Store::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::Decrement);
        assert!(result.changed);
        assert!(matches!(&result.effects[0], TestEffect::Log(s) if s == "count: -1"));

        let result = store.dispatch(TestAction::TriggerEffect);
        assert!(!result.changed);
        assert_eq!(result.effects, vec![TestEffect::Save]);
    }

    #[test]
    fn dispatch_result_builders() {
        let r: DispatchResult<TestEffect> = DispatchResult::unchanged();
        assert!(!r.changed && r.effects.is_empty() && !r.has_effects());

        let r = DispatchResult::changed_with(TestEffect::Save);
        assert!(r.changed);
        assert_eq!(r.effects, vec![TestEffect::Save]);

        let r: DispatchResult<TestEffect> = DispatchResult::unchanged()
            .with(TestEffect::Save)
            .mark_changed();
        assert!(r.changed);
        assert!(r.has_effects());
    }

    #[test]
    fn state_mut_allows_init() {
        let mut store = Store::new(TestState::default(), test_reducer);
        store.state_mut().counter = 100;
        assert_eq!(store.state().counter, 100);
    }
}
