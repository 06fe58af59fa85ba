//! Type-ahead search bar with suggestion dropdown

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tui_shell::widgets::{TextInput, TextInputProps};
use tui_shell::{Component, EventKind};

use crate::action::Action;
use crate::api::Recipe;
use crate::state::{spinner_frame, Theme};

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub suggestions: &'a [Recipe],
    /// Highlighted dropdown row; `None` keeps the raw query active.
    pub highlighted: Option<usize>,
    pub is_focused: bool,
    pub loading: bool,
    pub tick: u64,
    pub theme: Theme,
}

pub struct SearchBar {
    input: TextInput,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
        }
    }

    /// Height of the dropdown below the input, zero when closed.
    pub fn dropdown_height(suggestions: &[Recipe]) -> u16 {
        if suggestions.is_empty() {
            0
        } else {
            suggestions.len() as u16 + 2
        }
    }

    fn input_props<'a>(props: &SearchBarProps<'a>) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: props.query,
            placeholder: "Search recipes...",
            is_focused: props.is_focused,
            show_border: true,
            on_change: Action::SearchInput,
            on_submit: |_| Action::SearchCommit,
        }
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::SearchDismiss],
            KeyCode::Tab => return vec![Action::FocusBody],
            KeyCode::Down => {
                if !props.suggestions.is_empty() {
                    return vec![Action::SearchHighlightNext];
                }
                return Vec::new();
            }
            KeyCode::Up => {
                if !props.suggestions.is_empty() {
                    return vec![Action::SearchHighlightPrev];
                }
                return Vec::new();
            }
            _ => {}
        }

        self.input
            .handle_event(event, Self::input_props(&props))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let input_area = Rect { height: 3.min(area.height), ..area };
        self.input.render(frame, input_area, Self::input_props(&props));

        if props.loading {
            let spinner = Paragraph::new(Line::from(Span::styled(
                spinner_frame(props.tick).to_string(),
                Style::default().fg(props.theme.accent),
            )));
            let spinner_area = Rect {
                x: area.x + area.width.saturating_sub(3),
                y: area.y + 1,
                width: 1.min(area.width),
                height: 1.min(area.height),
            };
            frame.render_widget(spinner, spinner_area);
        }

        if props.suggestions.is_empty() || area.height <= 3 {
            return;
        }

        let dropdown_area = Rect {
            x: area.x,
            y: area.y + 3,
            width: area.width,
            height: Self::dropdown_height(props.suggestions).min(area.height - 3),
        };

        let items: Vec<ListItem> = props
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, recipe)| {
                let mut style = Style::default().fg(props.theme.fg);
                if props.highlighted == Some(i) {
                    style = style
                        .bg(props.theme.accent)
                        .add_modifier(Modifier::BOLD);
                }
                let meta = match (&recipe.category, &recipe.area) {
                    (Some(c), Some(a)) => format!("  ({c}, {a})"),
                    (Some(c), None) => format!("  ({c})"),
                    (None, Some(a)) => format!("  ({a})"),
                    (None, None) => String::new(),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(recipe.name.clone(), style),
                    Span::styled(meta, Style::default().fg(props.theme.dim)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(props.theme.accent)),
        );
        frame.render_widget(list, dropdown_area);
    }
}
