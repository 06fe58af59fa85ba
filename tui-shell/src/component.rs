//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI component that renders from props and emits actions.
///
/// Rules:
/// 1. Props contain all read-only data needed for rendering.
/// 2. `handle_event` returns actions, never mutates external state.
/// 3. `render` is a function of props plus internal UI state only
///    (cursor position, scroll offset).
///
/// Focus is passed through props rather than tracked globally, which keeps
/// components independent of how the app arranges its screens.
pub trait Component<A> {
    /// Data required to render the component (read-only).
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator<Item = A>`: `None`, `Some(action)`, or a
    /// `Vec`. The default implementation is for render-only components.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
