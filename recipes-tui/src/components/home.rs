//! Home screen: random batch with client-side filters

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_shell::widgets::{SelectList, SelectListProps};
use tui_shell::{Component, EventKind, Remote};

use crate::action::Action;
use crate::api::Recipe;
use crate::state::{spinner_frame, HomeState, Theme};

pub struct HomeProps<'a> {
    pub home: &'a HomeState,
    pub is_favorite: &'a dyn Fn(&str) -> bool,
    pub recent_searches: &'a [String],
    pub is_focused: bool,
    pub tick: u64,
    pub theme: Theme,
}

pub struct Home {
    list: SelectList,
}

impl Home {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(),
        }
    }

    fn list_items<'a>(props: &HomeProps<'a>) -> Vec<Line<'a>> {
        props
            .home
            .visible()
            .into_iter()
            .map(|recipe| {
                let star = if (props.is_favorite)(&recipe.id) {
                    "* "
                } else {
                    "  "
                };
                let meta = match (&recipe.category, &recipe.area) {
                    (Some(c), Some(a)) => format!("  {c} / {a}"),
                    (Some(c), None) => format!("  {c}"),
                    (None, Some(a)) => format!("  {a}"),
                    (None, None) => String::new(),
                };
                Line::from(vec![
                    Span::styled(star, Style::default().fg(props.theme.accent)),
                    Span::raw(recipe.name.clone()),
                    Span::styled(meta, Style::default().fg(props.theme.dim)),
                ])
            })
            .collect()
    }

    fn filter_line(home: &HomeState, theme: Theme) -> Line<'static> {
        let mut spans = vec![Span::styled(
            "Filters: ",
            Style::default().fg(theme.dim),
        )];
        let category = home.category_filter.as_deref().unwrap_or("all");
        let area = home.area_filter.as_deref().unwrap_or("all");
        spans.push(Span::raw(format!("category={category}  area={area}  ")));
        if home.favorites_only {
            spans.push(Span::styled(
                "favorites only",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Action> for Home {
    type Props<'a> = HomeProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Char('R') => return vec![Action::ReloadHome],
                KeyCode::Char('c') => return vec![Action::CycleCategory],
                KeyCode::Char('a') => return vec![Action::CycleArea],
                KeyCode::Char('o') => return vec![Action::ToggleFavoritesOnly],
                KeyCode::Char('x') => return vec![Action::ClearFilters],
                KeyCode::Char('f') => {
                    if let Some(recipe) = props.home.selected_recipe() {
                        return vec![Action::ToggleFavorite(recipe.id.clone())];
                    }
                    return Vec::new();
                }
                KeyCode::Char('s') => {
                    if let Some(recipe) = props.home.selected_recipe() {
                        return vec![Action::ShareRecipe {
                            id: recipe.id.clone(),
                        }];
                    }
                    return Vec::new();
                }
                KeyCode::Enter => {
                    if let Some(recipe) = props.home.selected_recipe() {
                        return vec![Action::OpenDetail {
                            id: recipe.id.clone(),
                            name: Some(recipe.name.clone()),
                        }];
                    }
                    return Vec::new();
                }
                _ => {}
            }
        }

        let items = Self::list_items(&props);
        let list_props = SelectListProps {
            items,
            selected: props.home.selected,
            is_focused: true,
            title: Some("Recipes"),
            on_select: Action::HomeSelect,
            // Enter is handled above; this arm is unreachable but the
            // constructor must produce something.
            on_activate: Action::HomeSelect,
        };
        self.list
            .handle_event(event, list_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Self::filter_line(props.home, props.theme)),
            chunks[0],
        );

        match &props.home.recipes {
            Remote::Idle | Remote::Loading => {
                let line = format!("{} loading recipes...", spinner_frame(props.tick));
                frame.render_widget(
                    Paragraph::new(line).style(Style::default().fg(props.theme.dim)),
                    chunks[1],
                );
            }
            Remote::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(format!("Could not load recipes: {message}"))
                        .style(Style::default().fg(ratatui::style::Color::Red)),
                    chunks[1],
                );
            }
            Remote::NotFound => {}
            Remote::Ready(_) => {
                if props.home.filtered.is_empty() {
                    frame.render_widget(
                        Paragraph::new("No recipes match the active filters")
                            .style(Style::default().fg(props.theme.dim)),
                        chunks[1],
                    );
                } else {
                    let items = Self::list_items(&props);
                    let list_props = SelectListProps {
                        items,
                        selected: props.home.selected,
                        is_focused: props.is_focused,
                        title: Some("Recipes"),
                        on_select: Action::HomeSelect,
                        on_activate: Action::HomeSelect,
                    };
                    self.list.render(frame, chunks[1], list_props);
                }
            }
        }

        let recent = if props.recent_searches.is_empty() {
            "Recent: (none)".to_string()
        } else {
            format!("Recent: {}", props.recent_searches.join(", "))
        };
        frame.render_widget(
            Paragraph::new(recent).style(Style::default().fg(props.theme.dim)),
            chunks[2],
        );
    }
}
