//! Application state
//!
//! One `AppState` for the whole app; only the reducer mutates it. Screens
//! render from read-only slices of this struct.

use std::collections::HashSet;

use ratatui::style::Color;
use tui_shell::Remote;

use crate::api::Recipe;

pub const SUGGESTION_CAP: usize = 10;
pub const RECENT_SEARCH_CAP: usize = 5;
pub const RANDOM_BATCH_SIZE: usize = 12;
pub const SUGGEST_DEBOUNCE_MS: u64 = 300;
pub const TICK_MS: u64 = 120;

/// Navigation target. `Results` and `Detail` carry the parameter the screen
/// fetches with, the way a URL would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Results { query: String },
    Detail { id: String },
}

/// Type-ahead search bar state.
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub suggestions: Vec<Recipe>,
    /// Highlighted suggestion; `None` means the raw query is active.
    pub highlighted: Option<usize>,
    pub focused: bool,
    pub loading: bool,
}

/// Home screen: random batch plus client-side filters.
#[derive(Debug, Default)]
pub struct HomeState {
    pub recipes: Remote<Vec<Recipe>>,
    pub categories: Vec<String>,
    pub areas: Vec<String>,
    pub category_filter: Option<String>,
    pub area_filter: Option<String>,
    pub favorites_only: bool,
    /// Indices into the base list after filters, recomputed by the reducer.
    pub filtered: Vec<usize>,
    pub selected: usize,
}

impl HomeState {
    /// Recipes currently visible, in filtered order.
    pub fn visible(&self) -> Vec<&Recipe> {
        match self.recipes.ready() {
            Some(recipes) => self
                .filtered
                .iter()
                .filter_map(|&i| recipes.get(i))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        let index = *self.filtered.get(self.selected)?;
        self.recipes.ready()?.get(index)
    }

    pub fn has_active_filter(&self) -> bool {
        self.category_filter.is_some() || self.area_filter.is_some() || self.favorites_only
    }
}

#[derive(Debug, Default)]
pub struct ResultsState {
    pub recipes: Remote<Vec<Recipe>>,
    pub selected: usize,
}

impl ResultsState {
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.recipes.ready()?.get(self.selected)
    }
}

pub struct AppState {
    pub route: Route,
    pub back_stack: Vec<Route>,
    pub search: SearchState,
    pub home: HomeState,
    pub results: ResultsState,
    pub detail: Remote<Recipe>,
    pub favorites: HashSet<String>,
    pub recent_searches: Vec<String>,
    pub dark_mode: bool,
    /// Transient status line (share/export confirmations).
    pub notice: Option<String>,
    pub tick_count: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Home,
            back_stack: Vec::new(),
            search: SearchState::default(),
            home: HomeState::default(),
            results: ResultsState::default(),
            detail: Remote::Idle,
            favorites: HashSet::new(),
            recent_searches: Vec::new(),
            dark_mode: false,
            notice: None,
            tick_count: 0,
        }
    }
}

impl AppState {
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Whether any screen-owned fetch is in flight (drives the spinner).
    pub fn is_loading(&self) -> bool {
        self.search.loading
            || self.home.recipes.is_loading()
            || self.results.recipes.is_loading()
            || self.detail.is_loading()
    }
}

/// Color palette derived from the persisted dark-mode flag.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub dim: Color,
}

impl Theme {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                bg: Color::Black,
                fg: Color::White,
                accent: Color::Yellow,
                dim: Color::DarkGray,
            }
        } else {
            Self {
                bg: Color::Reset,
                fg: Color::Black,
                accent: Color::Blue,
                dim: Color::Gray,
            }
        }
    }
}

/// Spinner frame for the current tick.
pub fn spinner_frame(tick: u64) -> char {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}
