//! Terminal weather lookup backed by OpenWeatherMap
//!
//! One screen: a search input, the current-weather panel, and favorites
//! plus history lists. Last city, history, and favorites persist across
//! runs.

mod action;
mod api;
mod components;
mod effect;
mod reducer;
mod state;

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use tui_shell::{Component, EffectContext, EventKind, EventOutcome, Runtime, Storage};

use crate::action::Action;
use crate::api::{ApiError, OpenWeather};
use crate::components::{
    CityLists, CityListsProps, SearchPanel, SearchPanelProps, WeatherPanel, WeatherPanelProps,
};
use crate::effect::Effect;
use crate::reducer::reducer;
use crate::state::{AppState, Focus, TICK_MS};

const KEY_LAST_CITY: &str = "lastCity";
const KEY_SEARCH_HISTORY: &str = "searchHistory";
const KEY_FAVORITES: &str = "favorites";

/// Terminal weather lookup backed by OpenWeatherMap
#[derive(Parser, Debug)]
#[command(name = "weather")]
#[command(about = "Look up current weather for a city")]
struct Args {
    /// City to fetch on start (defaults to the last looked-up city)
    #[arg(long, short)]
    city: Option<String>,

    /// OpenWeatherMap API key (falls back to OPENWEATHER_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Directory for preferences and logs
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Do not read or write preferences on disk
    #[arg(long)]
    ephemeral: bool,
}

fn data_dir(args: &Args) -> PathBuf {
    args.data_dir.clone().unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("weather-tui")
    })
}

fn init_tracing(dir: &std::path::Path) {
    let _ = std::fs::create_dir_all(dir);
    if let Ok(file) = std::fs::File::create(dir.join("weather.log")) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(file)
            .with_ansi(false)
            .try_init();
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let Some(api_key) = args
        .api_key
        .clone()
        .or_else(|| std::env::var("OPENWEATHER_API_KEY").ok())
    else {
        eprintln!("Error: no API key. Pass --api-key or set OPENWEATHER_API_KEY.");
        std::process::exit(1);
    };

    let dir = data_dir(&args);
    init_tracing(&dir);

    let storage = if args.ephemeral {
        Storage::in_memory()
    } else {
        Storage::open(dir.join("preferences.json"))
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, storage, args.city, api_key).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn initial_state(storage: &Storage) -> AppState {
    let mut state = AppState::default();
    if let Some(history) = storage.get::<Vec<String>>(KEY_SEARCH_HISTORY) {
        state.history = history;
    }
    if let Some(favorites) = storage.get::<Vec<String>>(KEY_FAVORITES) {
        state.favorites = favorites;
    }
    state
}

struct Ui {
    search: SearchPanel,
    weather: WeatherPanel,
    lists: CityLists,
}

impl Ui {
    fn new() -> Self {
        Self {
            search: SearchPanel::new(),
            weather: WeatherPanel,
            lists: CityLists::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

        self.search.render(
            frame,
            chunks[0],
            SearchPanelProps {
                query: &state.query,
                is_focused: state.focus == Focus::Search,
            },
        );

        let is_favorite = state
            .current
            .ready()
            .map(|reading| {
                state
                    .favorites
                    .iter()
                    .any(|f| f.eq_ignore_ascii_case(&reading.city))
            })
            .unwrap_or(false);
        self.weather.render(
            frame,
            chunks[1],
            WeatherPanelProps {
                requested_city: state.current_city.as_deref(),
                current: &state.current,
                is_favorite,
                tick: state.tick_count,
            },
        );

        self.lists.render(
            frame,
            chunks[2],
            CityListsProps {
                favorites: &state.favorites,
                favorites_selected: state.favorites_selected,
                history: &state.history,
                history_selected: state.history_selected,
                focus: state.focus,
            },
        );

        let help = match state.focus {
            Focus::Search => "type a city  enter fetch  esc panels  tab cycle  ctrl+c quit",
            Focus::Favorites => "j/k move  enter fetch  d remove  a add current  / search  tab cycle  q quit",
            Focus::History => "j/k move  enter fetch  c clear  a add current  / search  tab cycle  q quit",
        };
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if matches!(event, EventKind::Resize(..)) {
            return EventOutcome::ignored().with_render();
        }

        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return EventOutcome::action(Action::Quit);
            }
            if key.code == KeyCode::Tab {
                return EventOutcome::action(Action::FocusNext);
            }
            if state.focus != Focus::Search {
                match key.code {
                    KeyCode::Char('q') => return EventOutcome::action(Action::Quit),
                    KeyCode::Char('/') => return EventOutcome::action(Action::FocusSearch),
                    KeyCode::Char('a') => return EventOutcome::action(Action::AddFavorite),
                    _ => {}
                }
            }
        }

        if state.focus == Focus::Search {
            return EventOutcome::from_actions(self.search.handle_event(
                event,
                SearchPanelProps {
                    query: &state.query,
                    is_focused: true,
                },
            ));
        }

        EventOutcome::from_actions(self.lists.handle_event(
            event,
            CityListsProps {
                favorites: &state.favorites,
                favorites_selected: state.favorites_selected,
                history: &state.history,
                history_selected: state.history_selected,
                focus: state.focus,
            },
        ))
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut storage: Storage,
    start_city: Option<String>,
    api_key: String,
) -> io::Result<()> {
    let client = OpenWeather::new(api_key);
    let mut runtime = Runtime::new(initial_state(&storage), reducer);

    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(TICK_MS), || Action::Tick);

    // Fetch the starting city without touching the history
    if let Some(city) = start_city.or_else(|| storage.get::<String>(KEY_LAST_CITY)) {
        runtime.enqueue(Action::Lookup {
            city,
            record: false,
        });
    }

    let ui = RefCell::new(Ui::new());

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client, &mut storage),
        )
        .await
}

fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    client: &OpenWeather,
    storage: &mut Storage,
) {
    match effect {
        Effect::FetchWeather { city } => {
            let client = client.clone();
            ctx.tasks().spawn("weather", async move {
                match client.current(&city).await {
                    Ok(reading) => Action::WeatherDidLoad { city, reading },
                    Err(ApiError::CityNotFound(_)) => Action::WeatherDidNotFound { city },
                    Err(e) => Action::WeatherDidError {
                        city,
                        message: e.to_string(),
                    },
                }
            });
        }

        Effect::SaveLastCity { city } => storage.set(KEY_LAST_CITY, &city),
        Effect::SaveHistory { entries } => storage.set(KEY_SEARCH_HISTORY, &entries),
        Effect::SaveFavorites { cities } => storage.set(KEY_FAVORITES, &cities),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_reads_persisted_keys() {
        let mut storage = Storage::in_memory();
        storage.set(KEY_SEARCH_HISTORY, &vec!["Paris".to_string()]);
        storage.set(KEY_FAVORITES, &vec!["Lyon".to_string()]);

        let state = initial_state(&storage);
        assert_eq!(state.history, vec!["Paris"]);
        assert_eq!(state.favorites, vec!["Lyon"]);
    }

    #[test]
    fn initial_state_defaults_when_empty() {
        let state = initial_state(&Storage::in_memory());
        assert!(state.history.is_empty());
        assert!(state.favorites.is_empty());
        assert_eq!(state.focus, Focus::Search);
    }
}
