//! Favorites and history panels

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    Frame,
};
use tui_shell::widgets::{SelectList, SelectListProps};
use tui_shell::{Component, EventKind};

use crate::action::Action;
use crate::state::Focus;

pub struct CityListsProps<'a> {
    pub favorites: &'a [String],
    pub favorites_selected: usize,
    pub history: &'a [String],
    pub history_selected: usize,
    pub focus: Focus,
}

pub struct CityLists {
    favorites: SelectList,
    history: SelectList,
}

impl CityLists {
    pub fn new() -> Self {
        Self {
            favorites: SelectList::new(),
            history: SelectList::new(),
        }
    }

    fn lines(cities: &[String]) -> Vec<Line<'static>> {
        cities.iter().map(|c| Line::from(c.clone())).collect()
    }
}

impl Default for CityLists {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Action> for CityLists {
    type Props<'a> = CityListsProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match props.focus {
            Focus::Search => Vec::new(),

            Focus::Favorites => {
                if let EventKind::Key(key) = event {
                    match key.code {
                        KeyCode::Enter => {
                            if let Some(city) = props.favorites.get(props.favorites_selected) {
                                return vec![Action::Lookup {
                                    city: city.clone(),
                                    record: true,
                                }];
                            }
                            return Vec::new();
                        }
                        KeyCode::Char('d') | KeyCode::Delete => {
                            if !props.favorites.is_empty() {
                                return vec![Action::RemoveFavorite];
                            }
                            return Vec::new();
                        }
                        _ => {}
                    }
                }
                self.favorites
                    .handle_event(
                        event,
                        SelectListProps {
                            items: Self::lines(props.favorites),
                            selected: props.favorites_selected,
                            is_focused: true,
                            title: Some("Favorites"),
                            on_select: Action::FavoritesSelect,
                            on_activate: Action::FavoritesSelect,
                        },
                    )
                    .into_iter()
                    .collect()
            }

            Focus::History => {
                if let EventKind::Key(key) = event {
                    match key.code {
                        KeyCode::Enter => {
                            if let Some(city) = props.history.get(props.history_selected) {
                                return vec![Action::Lookup {
                                    city: city.clone(),
                                    record: true,
                                }];
                            }
                            return Vec::new();
                        }
                        KeyCode::Char('c') => {
                            if !props.history.is_empty() {
                                return vec![Action::ClearHistory];
                            }
                            return Vec::new();
                        }
                        _ => {}
                    }
                }
                self.history
                    .handle_event(
                        event,
                        SelectListProps {
                            items: Self::lines(props.history),
                            selected: props.history_selected,
                            is_focused: true,
                            title: Some("History"),
                            on_select: Action::HistorySelect,
                            on_activate: Action::HistorySelect,
                        },
                    )
                    .into_iter()
                    .collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);

        self.favorites.render(
            frame,
            chunks[0],
            SelectListProps {
                items: Self::lines(props.favorites),
                selected: props.favorites_selected,
                is_focused: props.focus == Focus::Favorites,
                title: Some("Favorites"),
                on_select: Action::FavoritesSelect,
                on_activate: Action::FavoritesSelect,
            },
        );

        self.history.render(
            frame,
            chunks[1],
            SelectListProps {
                items: Self::lines(props.history),
                selected: props.history_selected,
                is_focused: props.focus == Focus::History,
                title: Some("History"),
                on_select: Action::HistorySelect,
                on_activate: Action::HistorySelect,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_shell::testing::{key, ActionAssertions, RenderHarness};

    fn props<'a>(
        favorites: &'a [String],
        history: &'a [String],
        focus: Focus,
    ) -> CityListsProps<'a> {
        CityListsProps {
            favorites,
            favorites_selected: 0,
            history,
            history_selected: 0,
            focus,
        }
    }

    fn emitted(lists: &mut CityLists, k: &str, p: CityListsProps<'_>) -> Vec<Action> {
        lists
            .handle_event(&EventKind::Key(key(k)), p)
            .into_iter()
            .collect()
    }

    #[test]
    fn enter_on_favorite_looks_it_up() {
        let mut lists = CityLists::new();
        let favorites = vec!["Paris".to_string()];
        emitted(&mut lists, "enter", props(&favorites, &[], Focus::Favorites)).assert_first(
            Action::Lookup {
                city: "Paris".into(),
                record: true,
            },
        );
    }

    #[test]
    fn d_removes_selected_favorite() {
        let mut lists = CityLists::new();
        let favorites = vec!["Paris".to_string()];
        emitted(&mut lists, "d", props(&favorites, &[], Focus::Favorites))
            .assert_first(Action::RemoveFavorite);
    }

    #[test]
    fn enter_on_history_reruns_lookup() {
        let mut lists = CityLists::new();
        let history = vec!["Lyon".to_string()];
        emitted(&mut lists, "enter", props(&[], &history, Focus::History)).assert_first(
            Action::Lookup {
                city: "Lyon".into(),
                record: true,
            },
        );
    }

    #[test]
    fn c_clears_history() {
        let mut lists = CityLists::new();
        let history = vec!["Lyon".to_string()];
        emitted(&mut lists, "c", props(&[], &history, Focus::History))
            .assert_first(Action::ClearHistory);
        emitted(&mut lists, "c", props(&[], &[], Focus::History)).assert_empty();
    }

    #[test]
    fn navigation_targets_the_focused_list() {
        let mut lists = CityLists::new();
        let favorites = vec!["Paris".to_string(), "Lyon".to_string()];
        let history = vec!["Oslo".to_string(), "Rome".to_string()];

        emitted(&mut lists, "j", props(&favorites, &history, Focus::Favorites))
            .assert_first(Action::FavoritesSelect(1));
        emitted(&mut lists, "j", props(&favorites, &history, Focus::History))
            .assert_first(Action::HistorySelect(1));
    }

    #[test]
    fn search_focus_swallows_everything() {
        let mut lists = CityLists::new();
        let favorites = vec!["Paris".to_string()];
        emitted(&mut lists, "enter", props(&favorites, &[], Focus::Search)).assert_empty();
    }

    #[test]
    fn renders_both_panels() {
        let mut harness = RenderHarness::new(60, 8);
        let mut lists = CityLists::new();
        let favorites = vec!["Paris".to_string()];
        let history = vec!["Lyon".to_string()];

        let output = harness.render_to_string_plain(|frame| {
            lists.render(
                frame,
                frame.area(),
                props(&favorites, &history, Focus::Favorites),
            );
        });
        assert!(output.contains("Favorites"));
        assert!(output.contains("History"));
        assert!(output.contains("Paris"));
        assert!(output.contains("Lyon"));
    }
}
