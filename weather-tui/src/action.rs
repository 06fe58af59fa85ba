//! Actions
//!
//! Result actions carry the city they were requested for so a response for
//! a superseded lookup is dropped by the reducer.

use crate::api::WeatherReading;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    QueryInput(String),
    /// Submit the current query.
    Submit,
    /// Fetch a specific city. `record` pushes it into the search history,
    /// which submits and list selections do but the startup fetch does not.
    Lookup { city: String, record: bool },

    WeatherDidLoad { city: String, reading: WeatherReading },
    WeatherDidNotFound { city: String },
    WeatherDidError { city: String, message: String },

    FocusNext,
    FocusSearch,
    FavoritesSelect(usize),
    HistorySelect(usize),

    AddFavorite,
    RemoveFavorite,
    ClearHistory,

    Tick,
    Quit,
}

impl tui_shell::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::QueryInput(_) => "QueryInput",
            Action::Submit => "Submit",
            Action::Lookup { .. } => "Lookup",
            Action::WeatherDidLoad { .. } => "WeatherDidLoad",
            Action::WeatherDidNotFound { .. } => "WeatherDidNotFound",
            Action::WeatherDidError { .. } => "WeatherDidError",
            Action::FocusNext => "FocusNext",
            Action::FocusSearch => "FocusSearch",
            Action::FavoritesSelect(_) => "FavoritesSelect",
            Action::HistorySelect(_) => "HistorySelect",
            Action::AddFavorite => "AddFavorite",
            Action::RemoveFavorite => "RemoveFavorite",
            Action::ClearHistory => "ClearHistory",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
