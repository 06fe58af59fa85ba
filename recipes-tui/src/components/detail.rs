//! Recipe detail screen

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_shell::{Component, EventKind, Remote};

use crate::action::Action;
use crate::api::Recipe;
use crate::state::{spinner_frame, Theme};

pub struct DetailProps<'a> {
    pub id: &'a str,
    pub detail: &'a Remote<Recipe>,
    pub is_favorite: bool,
    pub is_focused: bool,
    pub tick: u64,
    pub theme: Theme,
}

/// Renders one recipe; instructions scroll with j/k.
pub struct Detail {
    scroll: u16,
}

impl Detail {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// Reset scroll when a different recipe is shown.
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn header_lines(recipe: &Recipe, is_favorite: bool, theme: Theme) -> Vec<Line<'static>> {
        let mut title_spans = vec![Span::styled(
            recipe.name.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )];
        if is_favorite {
            title_spans.push(Span::styled(" *", Style::default().fg(Color::Yellow)));
        }

        let mut badges = Vec::new();
        if let Some(category) = &recipe.category {
            badges.push(format!("[{category}]"));
        }
        if let Some(area) = &recipe.area {
            badges.push(format!("[{area}]"));
        }
        for tag in recipe.tag_list() {
            badges.push(format!("#{tag}"));
        }

        let mut lines = vec![Line::from(title_spans)];
        if !badges.is_empty() {
            lines.push(Line::from(Span::styled(
                badges.join(" "),
                Style::default().fg(theme.dim),
            )));
        }
        if let Some(youtube) = &recipe.youtube {
            if !youtube.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("Video: {youtube}"),
                    Style::default().fg(theme.dim),
                )));
            }
        }
        lines
    }
}

impl Default for Detail {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Action> for Detail {
    type Props<'a> = DetailProps<'a>;

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
            KeyCode::Char('f') if props.detail.is_ready() => {
                vec![Action::ToggleFavorite(props.id.to_string())]
            }
            KeyCode::Char('s') if props.detail.is_ready() => vec![Action::ShareRecipe {
                id: props.id.to_string(),
            }],
            KeyCode::Char('p') if props.detail.is_ready() => vec![Action::ExportRecipe],
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Vec::new()
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match props.detail {
            Remote::Idle | Remote::Loading => {
                let line = format!("{} loading recipe...", spinner_frame(props.tick));
                frame.render_widget(
                    Paragraph::new(line).style(Style::default().fg(props.theme.dim)),
                    area,
                );
            }
            Remote::NotFound => {
                frame.render_widget(
                    Paragraph::new(format!("No recipe with id {}", props.id))
                        .style(Style::default().fg(props.theme.dim)),
                    area,
                );
            }
            Remote::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(format!("Could not load recipe: {message}"))
                        .style(Style::default().fg(Color::Red)),
                    area,
                );
            }
            Remote::Ready(recipe) => {
                let header = Self::header_lines(recipe, props.is_favorite, props.theme);
                let ingredients = recipe.ingredients();

                let chunks = Layout::vertical([
                    Constraint::Length(header.len() as u16 + 1),
                    Constraint::Length((ingredients.len() as u16 + 2).min(10)),
                    Constraint::Min(3),
                ])
                .split(area);

                frame.render_widget(Paragraph::new(header), chunks[0]);

                let ingredient_lines: Vec<Line> = ingredients
                    .into_iter()
                    .map(|(name, measure)| {
                        if measure.is_empty() {
                            Line::from(format!("- {name}"))
                        } else {
                            Line::from(format!("- {name} ({measure})"))
                        }
                    })
                    .collect();
                frame.render_widget(
                    Paragraph::new(ingredient_lines)
                        .block(Block::default().borders(Borders::ALL).title("Ingredients")),
                    chunks[1],
                );

                let instructions = recipe.instructions.as_deref().unwrap_or("");
                frame.render_widget(
                    Paragraph::new(instructions)
                        .block(Block::default().borders(Borders::ALL).title("Instructions"))
                        .wrap(Wrap { trim: false })
                        .scroll((self.scroll, 0)),
                    chunks[2],
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_shell::testing::{key, ActionAssertions, RenderHarness};

    fn recipe() -> Recipe {
        serde_json::from_str(
            r#"{
                "idMeal": "52772",
                "strMeal": "Beef Ragu",
                "strCategory": "Beef",
                "strArea": "Italian",
                "strMealThumb": null,
                "strTags": "Pasta,Meat",
                "strYoutube": "https://youtube.test/x",
                "strInstructions": "Brown the beef. Simmer for two hours.",
                "strIngredient1": "Beef",
                "strMeasure1": "500g"
            }"#,
        )
        .unwrap()
    }

    fn emitted(component: &mut Detail, k: &str, detail: &Remote<Recipe>) -> Vec<Action> {
        let props = DetailProps {
            id: "52772",
            detail,
            is_favorite: false,
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
    fn actions_require_loaded_recipe() {
        let mut component = Detail::new();
        let loading = Remote::Loading;
        emitted(&mut component, "f", &loading).assert_empty();
        emitted(&mut component, "s", &loading).assert_empty();
        emitted(&mut component, "p", &loading).assert_empty();

        let ready = Remote::Ready(recipe());
        emitted(&mut component, "f", &ready)
            .assert_first(Action::ToggleFavorite("52772".into()));
        emitted(&mut component, "s", &ready)
            .assert_first(Action::ShareRecipe { id: "52772".into() });
        emitted(&mut component, "p", &ready).assert_first(Action::ExportRecipe);
    }

    #[test]
    fn j_and_k_scroll_instructions() {
        let mut component = Detail::new();
        let ready = Remote::Ready(recipe());
        emitted(&mut component, "j", &ready).assert_empty();
        emitted(&mut component, "j", &ready).assert_empty();
        assert_eq!(component.scroll, 2);

        emitted(&mut component, "k", &ready).assert_empty();
        assert_eq!(component.scroll, 1);

        component.reset_scroll();
        assert_eq!(component.scroll, 0);
    }

    #[test]
    fn renders_recipe_sections() {
        let mut harness = RenderHarness::new(60, 20);
        let mut component = Detail::new();
        let ready = Remote::Ready(recipe());

        let output = harness.render_to_string_plain(|frame| {
            component.render(
                frame,
                frame.area(),
                DetailProps {
                    id: "52772",
                    detail: &ready,
                    is_favorite: true,
                    is_focused: true,
                    tick: 0,
                    theme: Theme::for_mode(false),
                },
            );
        });
        assert!(output.contains("Beef Ragu"));
        assert!(output.contains("[Beef]"));
        assert!(output.contains("#Pasta"));
        assert!(output.contains("Beef (500g)"));
        assert!(output.contains("Brown the beef."));
    }

    #[test]
    fn renders_not_found_distinctly() {
        let mut harness = RenderHarness::new(50, 6);
        let mut component = Detail::new();
        let not_found: Remote<Recipe> = Remote::NotFound;

        let output = harness.render_to_string_plain(|frame| {
            component.render(
                frame,
                frame.area(),
                DetailProps {
                    id: "99999",
                    detail: &not_found,
                    is_favorite: false,
                    is_focused: true,
                    tick: 0,
                    theme: Theme::for_mode(false),
                },
            );
        });
        assert!(output.contains("No recipe with id 99999"));
        assert!(!output.contains("Could not load"));
    }
}
