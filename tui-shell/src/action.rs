//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store.
///
/// Actions represent intents to change state. They must be `Clone` (they may
/// be logged or re-sent), `Debug`, and `Send + 'static` so async tasks can
/// produce them.
pub trait Action: Clone + Debug + Send + 'static {
    /// Action name for logging and filtering.
    fn name(&self) -> &'static str;
}
