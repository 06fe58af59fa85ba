//! Current-weather panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_shell::{Component, Remote};

use crate::action::Action;
use crate::api::WeatherReading;
use crate::state::spinner_frame;

pub struct WeatherPanelProps<'a> {
    /// City the lookup was issued for, shown while loading and on errors.
    pub requested_city: Option<&'a str>,
    pub current: &'a Remote<WeatherReading>,
    pub is_favorite: bool,
    pub tick: u64,
}

pub struct WeatherPanel;

/// Rough glyph for an OpenWeatherMap icon code.
fn icon_glyph(icon: &str) -> &'static str {
    match icon.get(..2) {
        Some("01") => "(sun)",
        Some("02") | Some("03") | Some("04") => "(clouds)",
        Some("09") | Some("10") => "(rain)",
        Some("11") => "(storm)",
        Some("13") => "(snow)",
        Some("50") => "(mist)",
        _ => "",
    }
}

impl WeatherPanel {
    fn reading_lines(reading: &WeatherReading, is_favorite: bool) -> Vec<Line<'static>> {
        let mut title = vec![Span::styled(
            reading.city.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if is_favorite {
            title.push(Span::styled(" *", Style::default().fg(Color::Yellow)));
        }

        vec![
            Line::from(title),
            Line::from(""),
            Line::from(format!(
                "  {:.1} C  (feels like {:.1} C)",
                reading.temp, reading.feels_like
            )),
            Line::from(format!(
                "  {} {}",
                reading.description,
                icon_glyph(&reading.icon)
            )),
            Line::from(""),
            Line::from(format!("  humidity  {}%", reading.humidity)),
            Line::from(format!("  wind      {:.1} m/s", reading.wind_speed)),
        ]
    }
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default().borders(Borders::ALL).title("Weather");

        let lines = match props.current {
            Remote::Idle => vec![Line::from(Span::styled(
                "Type a city name and press Enter",
                Style::default().fg(Color::DarkGray),
            ))],
            Remote::Loading => {
                let city = props.requested_city.unwrap_or("...");
                vec![Line::from(format!(
                    "{} fetching weather for {city}...",
                    spinner_frame(props.tick)
                ))]
            }
            Remote::NotFound => {
                let city = props.requested_city.unwrap_or("that city");
                vec![Line::from(Span::styled(
                    format!("City \"{city}\" not found. Check the spelling."),
                    Style::default().fg(Color::Yellow),
                ))]
            }
            Remote::Failed(message) => vec![Line::from(Span::styled(
                format!("Could not fetch weather: {message}"),
                Style::default().fg(Color::Red),
            ))],
            Remote::Ready(reading) => Self::reading_lines(reading, props.is_favorite),
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
