//! Scrollable selection list

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::component::Component;
use crate::event::EventKind;

/// Props for [`SelectList`].
pub struct SelectListProps<'a, A> {
    /// Items to display, one line each.
    pub items: Vec<Line<'a>>,
    /// Index of the selected item.
    pub selected: usize,
    /// Whether this component has focus.
    pub is_focused: bool,
    /// Optional title shown in the border.
    pub title: Option<&'a str>,
    /// Called when the selection moves.
    pub on_select: fn(usize) -> A,
    /// Called with the selected index on Enter.
    pub on_activate: fn(usize) -> A,
}

/// A vertical list with vi-style navigation and a highlighted selection.
///
/// Selection lives in app state; the list only tracks its scroll offset so
/// the selected row stays visible.
#[derive(Default)]
pub struct SelectList {
    scroll_offset: usize,
}

impl SelectList {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, selected: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected + 1 - viewport_height;
        }
    }
}

impl<A> Component<A> for SelectList {
    type Props<'a> = SelectListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.items.is_empty() {
            return None;
        }

        let last = props.items.len() - 1;

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    if props.selected < last {
                        Some((props.on_select)(props.selected + 1))
                    } else {
                        None
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if props.selected > 0 {
                        Some((props.on_select)(props.selected - 1))
                    } else {
                        None
                    }
                }
                KeyCode::Home | KeyCode::Char('g') => {
                    if props.selected != 0 {
                        Some((props.on_select)(0))
                    } else {
                        None
                    }
                }
                KeyCode::End | KeyCode::Char('G') => {
                    if props.selected != last {
                        Some((props.on_select)(last))
                    } else {
                        None
                    }
                }
                KeyCode::Enter => Some((props.on_activate)(props.selected)),
                _ => None,
            },
            EventKind::Scroll { delta, .. } => {
                let target = if *delta > 0 {
                    (props.selected + *delta as usize).min(last)
                } else {
                    props.selected.saturating_sub(delta.unsigned_abs())
                };
                if target != props.selected {
                    Some((props.on_select)(target))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut block = Block::default().borders(Borders::ALL).border_style(
            if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        );
        if let Some(title) = props.title {
            block = block.title(title);
        }

        let viewport_height = area.height.saturating_sub(2) as usize;
        let selected = props.selected.min(props.items.len().saturating_sub(1));
        self.ensure_visible(selected, viewport_height);

        let items: Vec<ListItem> = props.items.into_iter().map(ListItem::new).collect();
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default()
            .with_offset(self.scroll_offset)
            .with_selected(Some(selected));

        frame.render_stateful_widget(list, area, &mut state);
    }
}
