//! Interval subscriptions for continuous action sources
//!
//! Unlike one-shot tasks, subscriptions are long-lived: tick timers for
//! animations and periodic refresh intervals.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::action::Action;

/// Identifies a subscription for cancellation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubKey(String);

impl SubKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for SubKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

/// Manages declarative subscriptions that continuously emit actions.
pub struct Subscriptions<A> {
    handles: HashMap<SubKey, JoinHandle<()>>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> Subscriptions<A>
where
    A: Action,
{
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            handles: HashMap::new(),
            action_tx,
        }
    }

    /// Emit an action at fixed intervals.
    ///
    /// The factory is called on each tick. A subscription re-registered
    /// under an existing key replaces the old one.
    pub fn interval<F>(
        &mut self,
        key: impl Into<SubKey>,
        duration: Duration,
        action_fn: F,
    ) -> &mut Self
    where
        F: Fn() -> A + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(duration);
            // Skip the immediate first tick
            interval.tick().await;

            loop {
                interval.tick().await;
                if tx.send(action_fn()).is_err() {
                    break;
                }
            }
        });

        self.handles.insert(key, handle);
        self
    }

    /// Cancel a subscription by key.
    pub fn cancel(&mut self, key: &SubKey) {
        if let Some(handle) = self.handles.remove(key) {
            handle.abort();
        }
    }

    /// Cancel all subscriptions.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    pub fn is_active(&self, key: &SubKey) -> bool {
        self.handles.contains_key(key)
    }
}

impl<A> Drop for Subscriptions<A> {
    fn drop(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum TestAction {
        Tick,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            "Tick"
        }
    }

    #[tokio::test]
    async fn interval_emits_repeatedly() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut subs = Subscriptions::new(tx);

        subs.interval("tick", Duration::from_millis(20), || TestAction::Tick);

        for _ in 0..2 {
            let action = tokio::time::timeout(Duration::from_millis(200), rx.recv())
                .await
                .expect("timeout")
                .expect("channel closed");
            assert!(matches!(action, TestAction::Tick));
        }
    }

    #[tokio::test]
    async fn cancel_stops_emission() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut subs = Subscriptions::new(tx);

        subs.interval("tick", Duration::from_millis(10), || TestAction::Tick);
        assert!(subs.is_active(&SubKey::new("tick")));

        subs.cancel(&SubKey::new("tick"));
        assert!(!subs.is_active(&SubKey::new("tick")));

        // Drain anything in flight, then expect silence
        while rx.try_recv().is_ok() {}
        let result = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(result.is_err());
    }
}
