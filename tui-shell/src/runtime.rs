//! The event/action/effect loop
//!
//! `Runtime` wires the store, the terminal event poller, the task manager
//! and subscriptions into one `tokio::select!` loop:
//!
//! 1. terminal event -> `map_event` -> actions
//! 2. action -> reducer -> state change + effects
//! 3. effects -> `handle_effect` (spawn tasks, persist, clipboard, ...)
//! 4. completed tasks send result actions back into the same queue
//! 5. re-render when the reducer reports a change

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::action::Action;
use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use crate::store::{Reducer, Store};
use crate::subscriptions::Subscriptions;
use crate::tasks::TaskManager;

/// Configuration for the event poller.
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Timeout passed to each `crossterm::event::poll` call.
    pub poll_timeout: Duration,
    /// Sleep between poll cycles.
    pub loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Result of mapping an event into actions plus an optional render hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    pub actions: Vec<A>,
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    /// No actions and no render.
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    /// Wrap a single action.
    pub fn action(action: A) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    /// Collect actions from a component's `handle_event` result.
    pub fn from_actions(iter: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    /// Mark that a render is needed regardless of state changes.
    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }
}

impl<A> Default for EventOutcome<A> {
    fn default() -> Self {
        Self::ignored()
    }
}

impl<A> From<A> for EventOutcome<A> {
    fn from(action: A) -> Self {
        Self::action(action)
    }
}

impl<A> From<Vec<A>> for EventOutcome<A> {
    fn from(actions: Vec<A>) -> Self {
        Self {
            actions,
            needs_render: false,
        }
    }
}

impl<A> From<Option<A>> for EventOutcome<A> {
    fn from(action: Option<A>) -> Self {
        match action {
            Some(action) => Self::action(action),
            None => Self::ignored(),
        }
    }
}

/// Context passed to the effect handler.
pub struct EffectContext<'a, A: Action> {
    action_tx: &'a mpsc::UnboundedSender<A>,
    tasks: &'a mut TaskManager<A>,
    subscriptions: &'a mut Subscriptions<A>,
}

impl<'a, A: Action> EffectContext<'a, A> {
    /// Send an action directly back into the queue.
    pub fn emit(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    /// Keyed async tasks (spawn / debounce / cancel).
    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        self.tasks
    }

    /// Interval subscriptions.
    pub fn subscriptions(&mut self) -> &mut Subscriptions<A> {
        self.subscriptions
    }
}

/// Runtime driving a store with effects.
pub struct Runtime<S, A: Action, E> {
    store: Store<S, A, E>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    poller_config: PollerConfig,
    should_render: bool,
    tasks: TaskManager<A>,
    subscriptions: Subscriptions<A>,
}

impl<S: 'static, A: Action, E> Runtime<S, A, E> {
    /// Create a runtime from state + reducer.
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        let subscriptions = Subscriptions::new(action_tx.clone());

        Self {
            store: Store::new(state, reducer),
            action_tx,
            action_rx,
            poller_config: PollerConfig::default(),
            should_render: true,
            tasks,
            subscriptions,
        }
    }

    /// Configure event polling behavior.
    pub fn with_event_poller(mut self, config: PollerConfig) -> Self {
        self.poller_config = config;
        self
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    /// Clone the action sender.
    pub fn action_tx(&self) -> mpsc::UnboundedSender<A> {
        self.action_tx.clone()
    }

    /// Access the current state.
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Access the task manager, e.g. to seed work before `run`.
    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        &mut self.tasks
    }

    /// Access subscriptions, e.g. to register the tick timer.
    pub fn subscriptions(&mut self) -> &mut Subscriptions<A> {
        &mut self.subscriptions
    }

    /// Run the event/action loop until `should_quit` matches an action.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect, R>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> R,
        R: Into<EventOutcome<A>>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(
            event_tx,
            self.poller_config.poll_timeout,
            self.poller_config.loop_sleep,
            cancel_token.clone(),
        );

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    render(frame, frame.area(), state);
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);
                    let outcome: EventOutcome<A> = map_event(&event, self.store.state()).into();
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    let result = self.store.dispatch(action);
                    if result.has_effects() {
                        let mut ctx = EffectContext {
                            action_tx: &self.action_tx,
                            tasks: &mut self.tasks,
                            subscriptions: &mut self.subscriptions,
                        };
                        for effect in result.effects {
                            handle_effect(effect, &mut ctx);
                        }
                    }
                    self.should_render |= result.changed;
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.subscriptions.cancel_all();
        self.tasks.cancel_all();

        Ok(())
    }
}
