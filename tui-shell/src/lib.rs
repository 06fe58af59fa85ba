//! Shared application shell for the terminal apps in this workspace.
//!
//! The two binaries (`recipes`, `weather`) follow the same architecture:
//!
//! - **Action**: events describing state changes
//! - **Store**: central state container; only the reducer mutates state
//! - **Effect**: declarative side effects returned by the reducer
//! - **Runtime**: the event/action/effect loop driving a ratatui terminal
//! - **TaskManager**: keyed async tasks with cancellation and debounce
//! - **Component**: pure UI elements rendering from read-only props
//!
//! This crate also carries the concerns both apps share: `Remote<T>` for
//! per-screen fetch state, `Storage` for persisted user preferences, the
//! reusable input/list widgets, and test helpers.

pub mod action;
pub mod component;
pub mod event;
pub mod remote;
pub mod runtime;
pub mod storage;
pub mod store;
pub mod subscriptions;
pub mod tasks;
pub mod testing;
pub mod widgets;

pub use action::Action;
pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use remote::Remote;
pub use runtime::{EffectContext, EventOutcome, PollerConfig, Runtime};
pub use storage::Storage;
pub use store::{DispatchResult, Reducer, Store};
pub use subscriptions::{SubKey, Subscriptions};
pub use tasks::{TaskKey, TaskManager};

// Re-export ratatui types used in every component signature
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};
