//! Application state

use tui_shell::Remote;

use crate::api::WeatherReading;

pub const HISTORY_CAP: usize = 5;
pub const TICK_MS: u64 = 120;

/// Which panel receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Favorites,
    History,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Favorites,
            Focus::Favorites => Focus::History,
            Focus::History => Focus::Search,
        }
    }
}

#[derive(Default)]
pub struct AppState {
    pub query: String,
    pub focus: Focus,
    /// City the in-flight or shown reading was requested for.
    pub current_city: Option<String>,
    pub current: Remote<WeatherReading>,
    /// Ordered city names, case-insensitively unique.
    pub favorites: Vec<String>,
    pub favorites_selected: usize,
    /// Most recent first, capped at [`HISTORY_CAP`].
    pub history: Vec<String>,
    pub history_selected: usize,
    pub tick_count: u64,
}

impl AppState {
    pub fn is_loading(&self) -> bool {
        self.current.is_loading()
    }
}

pub fn spinner_frame(tick: u64) -> char {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}
