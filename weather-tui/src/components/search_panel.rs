//! City search input

use crossterm::event::KeyCode;
use ratatui::{layout::Rect, Frame};
use tui_shell::widgets::{TextInput, TextInputProps};
use tui_shell::{Component, EventKind};

use crate::action::Action;

pub struct SearchPanelProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
}

pub struct SearchPanel {
    input: TextInput,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
        }
    }

    fn input_props<'a>(props: &SearchPanelProps<'a>) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: props.query,
            placeholder: "City name...",
            is_focused: props.is_focused,
            show_border: true,
            on_change: Action::QueryInput,
            on_submit: |_| Action::Submit,
        }
    }
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Action> for SearchPanel {
    type Props<'a> = SearchPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Esc {
                return vec![Action::FocusNext];
            }
        }

        self.input
            .handle_event(event, Self::input_props(&props))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.input.render(frame, area, Self::input_props(&props));
    }
}
