//! Search results screen

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_shell::widgets::{SelectList, SelectListProps};
use tui_shell::{Component, EventKind, Remote};

use crate::action::Action;
use crate::state::{spinner_frame, ResultsState, Theme};

pub struct ResultsProps<'a> {
    pub query: &'a str,
    pub results: &'a ResultsState,
    pub is_favorite: &'a dyn Fn(&str) -> bool,
    pub is_focused: bool,
    pub tick: u64,
    pub theme: Theme,
}

pub struct Results {
    list: SelectList,
}

impl Results {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(),
        }
    }

    fn list_items(props: &ResultsProps<'_>) -> Vec<Line<'static>> {
        let Some(recipes) = props.results.recipes.ready() else {
            return Vec::new();
        };
        recipes
            .iter()
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
                    Span::styled(star.to_string(), Style::default().fg(props.theme.accent)),
                    Span::raw(recipe.name.clone()),
                    Span::styled(meta, Style::default().fg(props.theme.dim)),
                ])
            })
            .collect()
    }
}

impl Default for Results {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Action> for Results {
    type Props<'a> = ResultsProps<'a>;

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
                KeyCode::Enter => {
                    if let Some(recipe) = props.results.selected_recipe() {
                        return vec![Action::OpenDetail {
                            id: recipe.id.clone(),
                            name: Some(recipe.name.clone()),
                        }];
                    }
                    return Vec::new();
                }
                KeyCode::Char('f') => {
                    if let Some(recipe) = props.results.selected_recipe() {
                        return vec![Action::ToggleFavorite(recipe.id.clone())];
                    }
                    return Vec::new();
                }
                KeyCode::Char('s') => {
                    if let Some(recipe) = props.results.selected_recipe() {
                        return vec![Action::ShareRecipe {
                            id: recipe.id.clone(),
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
            selected: props.results.selected,
            is_focused: true,
            title: None,
            on_select: Action::ResultsSelect,
            on_activate: Action::ResultsSelect,
        };
        self.list
            .handle_event(event, list_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match &props.results.recipes {
            Remote::Idle | Remote::Loading => {
                let line = format!(
                    "{} searching for \"{}\"...",
                    spinner_frame(props.tick),
                    props.query
                );
                frame.render_widget(
                    Paragraph::new(line).style(Style::default().fg(props.theme.dim)),
                    area,
                );
            }
            Remote::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(format!("Search failed: {message}"))
                        .style(Style::default().fg(Color::Red)),
                    area,
                );
            }
            Remote::NotFound => {}
            Remote::Ready(recipes) if recipes.is_empty() => {
                frame.render_widget(
                    Paragraph::new(format!("No recipes found for \"{}\"", props.query))
                        .style(Style::default().fg(props.theme.dim)),
                    area,
                );
            }
            Remote::Ready(_) => {
                let title = format!("Results for \"{}\"", props.query);
                let items = Self::list_items(&props);
                let list_props = SelectListProps {
                    items,
                    selected: props.results.selected,
                    is_focused: props.is_focused,
                    title: Some(&title),
                    on_select: Action::ResultsSelect,
                    on_activate: Action::ResultsSelect,
                };
                self.list.render(frame, area, list_props);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Recipe;
    use tui_shell::testing::{key, ActionAssertions, RenderHarness};

    fn recipe(id: &str, name: &str) -> Recipe {
        serde_json::from_str(&format!(
            r#"{{"idMeal":"{id}","strMeal":"{name}","strCategory":"Beef","strArea":"Italian",
                "strMealThumb":null,"strTags":null,"strYoutube":null,"strInstructions":"x"}}"#
        ))
        .unwrap()
    }

    fn ready_results() -> ResultsState {
        ResultsState {
            recipes: Remote::Ready(vec![recipe("1", "Pizza"), recipe("2", "Pizza Pie")]),
            selected: 0,
        }
    }

    fn emitted(component: &mut Results, k: &str, results: &ResultsState) -> Vec<Action> {
        let no_favorites = |_: &str| false;
        let props = ResultsProps {
            query: "pizza",
            results,
            is_favorite: &no_favorites,
            is_focused: true,
            tick: 0,
            theme: Theme::for_mode(false),
        };
        component
            .handle_event(&EventKind::Key(key(k)), props)
            .into_iter()
            .collect()
    }

    #[test]
    fn enter_opens_detail() {
        let mut component = Results::new();
        let results = ready_results();
        emitted(&mut component, "enter", &results).assert_first(Action::OpenDetail {
            id: "1".into(),
            name: Some("Pizza".into()),
        });
    }

    #[test]
    fn navigation_selects() {
        let mut component = Results::new();
        let results = ready_results();
        emitted(&mut component, "j", &results).assert_first(Action::ResultsSelect(1));
    }

    #[test]
    fn loading_state_ignores_item_keys() {
        let mut component = Results::new();
        let results = ResultsState {
            recipes: Remote::Loading,
            selected: 0,
        };
        emitted(&mut component, "enter", &results).assert_empty();
        emitted(&mut component, "f", &results).assert_empty();
    }

    #[test]
    fn renders_empty_state() {
        let mut harness = RenderHarness::new(50, 6);
        let mut component = Results::new();
        let results = ResultsState {
            recipes: Remote::Ready(Vec::new()),
            selected: 0,
        };
        let no_favorites = |_: &str| false;

        let output = harness.render_to_string_plain(|frame| {
            component.render(
                frame,
                frame.area(),
                ResultsProps {
                    query: "xyzzy",
                    results: &results,
                    is_favorite: &no_favorites,
                    is_focused: true,
                    tick: 0,
                    theme: Theme::for_mode(false),
                },
            );
        });
        assert!(output.contains("No recipes found for \"xyzzy\""));
    }
}
