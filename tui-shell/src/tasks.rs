//! Keyed async tasks with cancellation and debounce
//!
//! Tasks with the same key are mutually exclusive: spawning a key that is
//! already running aborts the in-flight task first, so a response for a
//! superseded request is never delivered. `debounce` additionally sleeps
//! before running, which makes search-as-you-type issue a single request
//! once input has been quiescent for the interval.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::action::Action;

/// Identifies a task for cancellation and replacement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Manages async task lifecycle with automatic cancellation.
///
/// Completed tasks send their resulting action back to the main loop over
/// the action channel; aborted tasks send nothing.
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task, aborting any existing task with the same key.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Spawn a task that waits for `duration` before executing.
    ///
    /// Calling again with the same key before the duration expires aborts
    /// the pending task and restarts the timer, so the wrapped request is
    /// never issued for stale input.
    pub fn debounce<F>(
        &mut self,
        key: impl Into<TaskKey>,
        duration: Duration,
        future: F,
    ) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key. No-op if the key is not running.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Cancel all running tasks.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Whether a task with the given key is currently registered.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug)]
    enum TestAction {
        Done(usize),
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            "Done"
        }
    }

    #[tokio::test]
    async fn spawn_sends_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("test", async { TestAction::Done(42) });

        let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        assert!(matches!(action, TestAction::Done(42)));
    }

    #[tokio::test]
    async fn spawn_cancels_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        let counter = Arc::new(AtomicUsize::new(0));

        let c1 = counter.clone();
        tasks.spawn("test", async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            c1.fetch_add(1, Ordering::SeqCst);
            TestAction::Done(1)
        });

        let c2 = counter.clone();
        tasks.spawn("test", async move {
            c2.fetch_add(10, Ordering::SeqCst);
            TestAction::Done(2)
        });

        // Only the replacement runs
        let action = tokio::time::timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        assert!(matches!(action, TestAction::Done(2)));
        assert_eq!(counter.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn debounce_waits_for_quiescence() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.debounce("test", Duration::from_millis(50), async {
            TestAction::Done(1)
        });

        // Not yet
        let result = tokio::time::timeout(Duration::from_millis(30), rx.recv()).await;
        assert!(result.is_err());

        // After the interval
        let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        assert!(matches!(action, TestAction::Done(1)));
    }

    #[tokio::test]
    async fn debounce_restarts_on_new_input() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        // "piz", then "pizza" inside the window: only the second fires
        tasks.debounce("search", Duration::from_millis(50), async {
            TestAction::Done(1)
        });
        tokio::time::sleep(Duration::from_millis(30)).await;
        tasks.debounce("search", Duration::from_millis(50), async {
            TestAction::Done(2)
        });

        let action = tokio::time::timeout(Duration::from_millis(150), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        assert!(matches!(action, TestAction::Done(2)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("test", async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            TestAction::Done(1)
        });

        assert!(tasks.is_running(&TaskKey::new("test")));
        tasks.cancel(&TaskKey::new("test"));
        assert!(!tasks.is_running(&TaskKey::new("test")));

        let result = tokio::time::timeout(Duration::from_millis(150), rx.recv()).await;
        assert!(result.is_err() || result.unwrap().is_none());
    }

    #[tokio::test]
    async fn cancel_all_empties_registry() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("a", async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            TestAction::Done(1)
        });
        tasks.spawn("b", async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            TestAction::Done(2)
        });

        assert_eq!(tasks.len(), 2);
        tasks.cancel_all();
        assert!(tasks.is_empty());
    }
}
