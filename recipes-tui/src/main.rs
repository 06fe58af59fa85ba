//! Terminal recipe browser backed by TheMealDB
//!
//! Event loop: keyboard events become actions, the reducer mutates one
//! `AppState` and declares effects, the effect handler spawns API tasks and
//! performs storage/clipboard work. Results come back as `Did` actions.

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
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tracing::warn;
use tui_shell::{
    Component, EffectContext, EventKind, EventOutcome, Runtime, Storage, TaskKey,
};

use crate::action::Action;
use crate::api::MealDb;
use crate::components::{
    Detail, DetailProps, HelpBar, HelpBarProps, Home, HomeProps, Results, ResultsProps,
    SearchBar, SearchBarProps,
};
use crate::effect::Effect;
use crate::reducer::reducer;
use crate::state::{
    AppState, Route, Theme, RANDOM_BATCH_SIZE, SUGGEST_DEBOUNCE_MS, TICK_MS,
};

const KEY_FAVORITES: &str = "favorites";
const KEY_RECENT_SEARCHES: &str = "recentSearches";
const KEY_DARK_MODE: &str = "darkMode";

/// Terminal recipe browser backed by TheMealDB
#[derive(Parser, Debug)]
#[command(name = "recipes")]
#[command(about = "Search and browse recipes from TheMealDB")]
struct Args {
    /// Directory for preferences, exports and logs
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
            .join("recipes-tui")
    })
}

fn init_tracing(dir: &std::path::Path) {
    let _ = std::fs::create_dir_all(dir);
    if let Ok(file) = std::fs::File::create(dir.join("recipes.log")) {
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

    let result = run_app(&mut terminal, storage, dir).await;

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
    if let Some(favorites) = storage.get::<Vec<String>>(KEY_FAVORITES) {
        state.favorites = favorites.into_iter().collect();
    }
    if let Some(recent) = storage.get::<Vec<String>>(KEY_RECENT_SEARCHES) {
        state.recent_searches = recent;
    }
    if let Some(dark) = storage.get::<bool>(KEY_DARK_MODE) {
        state.dark_mode = dark;
    }
    state
}

struct Ui {
    search_bar: SearchBar,
    home: Home,
    results: Results,
    detail: Detail,
    help_bar: HelpBar,
    last_detail_id: Option<String>,
}

impl Ui {
    fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            home: Home::new(),
            results: Results::new(),
            detail: Detail::new(),
            help_bar: HelpBar,
            last_detail_id: None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let theme = Theme::for_mode(state.dark_mode);
        if area.height < 5 {
            return;
        }

        let body = Rect {
            y: area.y + 3,
            height: area.height - 4,
            ..area
        };
        let help = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };

        let is_favorite = |id: &str| state.is_favorite(id);

        match &state.route {
            Route::Home => {
                self.home.render(
                    frame,
                    body,
                    HomeProps {
                        home: &state.home,
                        is_favorite: &is_favorite,
                        recent_searches: &state.recent_searches,
                        is_focused: !state.search.focused,
                        tick: state.tick_count,
                        theme,
                    },
                );
            }
            Route::Results { query } => {
                self.results.render(
                    frame,
                    body,
                    ResultsProps {
                        query,
                        results: &state.results,
                        is_favorite: &is_favorite,
                        is_focused: !state.search.focused,
                        tick: state.tick_count,
                        theme,
                    },
                );
            }
            Route::Detail { id } => {
                if self.last_detail_id.as_deref() != Some(id.as_str()) {
                    self.detail.reset_scroll();
                    self.last_detail_id = Some(id.clone());
                }
                self.detail.render(
                    frame,
                    body,
                    DetailProps {
                        id,
                        detail: &state.detail,
                        is_favorite: state.is_favorite(id),
                        is_focused: !state.search.focused,
                        tick: state.tick_count,
                        theme,
                    },
                );
            }
        }

        self.help_bar.render(
            frame,
            help,
            HelpBarProps {
                route: &state.route,
                search_focused: state.search.focused,
                notice: state.notice.as_deref(),
                theme,
            },
        );

        // Search bar last so its dropdown overlays the body
        let search_area = Rect {
            height: (3 + SearchBar::dropdown_height(&state.search.suggestions))
                .min(area.height - 1),
            ..area
        };
        self.search_bar.render(
            frame,
            search_area,
            SearchBarProps {
                query: &state.search.query,
                suggestions: &state.search.suggestions,
                highlighted: state.search.highlighted,
                is_focused: state.search.focused,
                loading: state.search.loading,
                tick: state.tick_count,
                theme,
            },
        );
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if matches!(event, EventKind::Resize(..)) {
            return EventOutcome::ignored().with_render();
        }

        if let EventKind::Key(key) = event {
            use crossterm::event::{KeyCode, KeyModifiers};
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return EventOutcome::action(Action::Quit);
            }
        }

        if state.search.focused {
            let props = SearchBarProps {
                query: &state.search.query,
                suggestions: &state.search.suggestions,
                highlighted: state.search.highlighted,
                is_focused: true,
                loading: state.search.loading,
                tick: state.tick_count,
                theme: Theme::for_mode(state.dark_mode),
            };
            return EventOutcome::from_actions(self.search_bar.handle_event(event, props));
        }

        if let EventKind::Key(key) = event {
            use crossterm::event::KeyCode;
            match key.code {
                KeyCode::Char('q') => return EventOutcome::action(Action::Quit),
                KeyCode::Char('/') => return EventOutcome::action(Action::FocusSearch),
                KeyCode::Char('t') => return EventOutcome::action(Action::ToggleDarkMode),
                KeyCode::Char('r') => return EventOutcome::action(Action::ClearRecentSearches),
                KeyCode::Esc | KeyCode::Backspace => {
                    if state.route != Route::Home {
                        return EventOutcome::action(Action::GoBack);
                    }
                    return EventOutcome::ignored();
                }
                _ => {}
            }
        }

        let theme = Theme::for_mode(state.dark_mode);
        let is_favorite = |id: &str| state.is_favorite(id);
        match &state.route {
            Route::Home => EventOutcome::from_actions(self.home.handle_event(
                event,
                HomeProps {
                    home: &state.home,
                    is_favorite: &is_favorite,
                    recent_searches: &state.recent_searches,
                    is_focused: true,
                    tick: state.tick_count,
                    theme,
                },
            )),
            Route::Results { query } => EventOutcome::from_actions(self.results.handle_event(
                event,
                ResultsProps {
                    query,
                    results: &state.results,
                    is_favorite: &is_favorite,
                    is_focused: true,
                    tick: state.tick_count,
                    theme,
                },
            )),
            Route::Detail { id } => EventOutcome::from_actions(self.detail.handle_event(
                event,
                DetailProps {
                    id,
                    detail: &state.detail,
                    is_favorite: state.is_favorite(id),
                    is_focused: true,
                    tick: state.tick_count,
                    theme,
                },
            )),
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut storage: Storage,
    dir: PathBuf,
) -> io::Result<()> {
    let client = MealDb::new();
    let mut runtime = Runtime::new(initial_state(&storage), reducer);

    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(TICK_MS), || Action::Tick);

    // Seed the home screen; the reducer turns this into the batch fetch
    runtime.enqueue(Action::ReloadHome);

    let export_dir = dir.join("exports");
    let ui = RefCell::new(Ui::new());

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client, &mut storage, &export_dir),
        )
        .await
}

fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    client: &MealDb,
    storage: &mut Storage,
    export_dir: &std::path::Path,
) {
    match effect {
        Effect::SuggestSearch { query } => {
            if query.trim().chars().count() < 2 {
                ctx.tasks().cancel(&TaskKey::new("suggest"));
                return;
            }
            let client = client.clone();
            ctx.tasks().debounce(
                "suggest",
                Duration::from_millis(SUGGEST_DEBOUNCE_MS),
                async move {
                    // Type-ahead failures are swallowed; an error just
                    // empties the dropdown.
                    let recipes = client.search(&query).await.unwrap_or_default();
                    Action::SuggestionsDidLoad { query, recipes }
                },
            );
        }

        Effect::SearchFull { query } => {
            let client = client.clone();
            ctx.tasks().spawn("search", async move {
                match client.search(&query).await {
                    Ok(recipes) => Action::ResultsDidLoad { query, recipes },
                    Err(e) => Action::ResultsDidError {
                        query,
                        message: e.to_string(),
                    },
                }
            });
        }

        Effect::FetchDetail { id } => {
            let client = client.clone();
            ctx.tasks().spawn("detail", async move {
                match client.lookup(&id).await {
                    Ok(recipe) => Action::DetailDidLoad {
                        id,
                        recipe: Box::new(recipe),
                    },
                    Err(api::ApiError::NotFound) => Action::DetailNotFound { id },
                    Err(e) => Action::DetailDidError {
                        id,
                        message: e.to_string(),
                    },
                }
            });
        }

        Effect::LoadHome => {
            let client = client.clone();
            ctx.tasks().spawn("home", async move {
                let recipes = client.random_batch(RANDOM_BATCH_SIZE).await;
                if recipes.is_empty() {
                    Action::HomeDidError("no recipes could be loaded".to_string())
                } else {
                    Action::HomeDidLoad(recipes)
                }
            });
        }

        Effect::FetchFilterLists => {
            let client = client.clone();
            ctx.tasks().spawn("filters", async move {
                let (categories, areas) =
                    tokio::join!(client.list_categories(), client.list_areas());
                Action::FilterListsDidLoad {
                    categories: categories.unwrap_or_default(),
                    areas: areas.unwrap_or_default(),
                }
            });
        }

        Effect::CopyToClipboard { text } => {
            // Failure here is treated like the user cancelling a share sheet
            match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
                Ok(()) => ctx.emit(Action::NoticeShow("Link copied to clipboard".to_string())),
                Err(e) => warn!(%e, "clipboard copy failed"),
            }
        }

        Effect::ExportRecipe { recipe } => {
            let path = export_dir.join(format!("{}.txt", recipe.id));
            let written = std::fs::create_dir_all(export_dir)
                .and_then(|()| std::fs::write(&path, recipe.export_text()));
            match written {
                Ok(()) => ctx.emit(Action::NoticeShow(format!(
                    "Exported to {}",
                    path.display()
                ))),
                Err(e) => {
                    warn!(%e, path = %path.display(), "recipe export failed");
                    ctx.emit(Action::NoticeShow("Export failed".to_string()));
                }
            }
        }

        Effect::SaveFavorites { favorites } => storage.set(KEY_FAVORITES, &favorites),
        Effect::SaveRecentSearches { entries } => storage.set(KEY_RECENT_SEARCHES, &entries),
        Effect::SaveDarkMode { enabled } => storage.set(KEY_DARK_MODE, &enabled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_reads_persisted_keys() {
        let mut storage = Storage::in_memory();
        storage.set(KEY_FAVORITES, &vec!["52772".to_string()]);
        storage.set(KEY_RECENT_SEARCHES, &vec!["Pizza".to_string()]);
        storage.set(KEY_DARK_MODE, &true);

        let state = initial_state(&storage);
        assert!(state.favorites.contains("52772"));
        assert_eq!(state.recent_searches, vec!["Pizza"]);
        assert!(state.dark_mode);
    }

    #[test]
    fn initial_state_defaults_when_empty() {
        let storage = Storage::in_memory();
        let state = initial_state(&storage);
        assert!(state.favorites.is_empty());
        assert!(state.recent_searches.is_empty());
        assert!(!state.dark_mode);
        assert_eq!(state.route, Route::Home);
    }
}
