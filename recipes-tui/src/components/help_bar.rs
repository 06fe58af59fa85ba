//! One-line key help at the bottom of the screen

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_shell::Component;

use crate::action::Action;
use crate::state::{Route, Theme};

pub struct HelpBarProps<'a> {
    pub route: &'a Route,
    pub search_focused: bool,
    pub notice: Option<&'a str>,
    pub theme: Theme,
}

pub struct HelpBar;

impl HelpBar {
    fn keys_for(route: &Route, search_focused: bool) -> &'static str {
        if search_focused {
            return "type to search  up/down highlight  enter open  esc close  tab back";
        }
        match route {
            Route::Home => {
                "/ search  j/k  enter  f fav  s share  c/a/o filters  x clear  R reload  t theme  q quit"
            }
            Route::Results { .. } => {
                "/ search  j/k move  enter open  f fav  s share  esc back  q quit"
            }
            Route::Detail { .. } => {
                "j/k scroll  f fav  s share  p export  esc back  q quit"
            }
        }
    }
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let line = match props.notice {
            Some(notice) => Line::from(Span::styled(
                notice.to_string(),
                Style::default().fg(props.theme.accent),
            )),
            None => Line::from(Span::styled(
                Self::keys_for(props.route, props.search_focused),
                Style::default().fg(props.theme.dim),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}
