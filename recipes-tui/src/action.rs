//! Actions
//!
//! Naming convention: intent verbs (`Fetch`, `Open`, `Toggle`) for user
//! input, `Did` for async results arriving back from tasks. Result actions
//! carry the query/id they were issued for so the reducer can drop stale
//! responses.

use crate::api::Recipe;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // Search bar
    SearchInput(String),
    SuggestionsDidLoad { query: String, recipes: Vec<Recipe> },
    SearchHighlightNext,
    SearchHighlightPrev,
    SearchCommit,
    SearchDismiss,
    FocusSearch,
    FocusBody,

    // Navigation
    OpenDetail { id: String, name: Option<String> },
    OpenResults { query: String },
    GoBack,

    // Home
    ReloadHome,
    HomeDidLoad(Vec<Recipe>),
    HomeDidError(String),
    FilterListsDidLoad { categories: Vec<String>, areas: Vec<String> },
    HomeSelect(usize),
    CycleCategory,
    CycleArea,
    ToggleFavoritesOnly,
    ClearFilters,

    // Results
    ResultsDidLoad { query: String, recipes: Vec<Recipe> },
    ResultsDidError { query: String, message: String },
    ResultsSelect(usize),

    // Detail
    DetailDidLoad { id: String, recipe: Box<Recipe> },
    DetailNotFound { id: String },
    DetailDidError { id: String, message: String },

    // Collections and preferences
    ToggleFavorite(String),
    ShareRecipe { id: String },
    ExportRecipe,
    ClearRecentSearches,
    ToggleDarkMode,

    // Desktop integration results
    NoticeShow(String),

    // Global
    Tick,
    Quit,
}

impl tui_shell::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SearchInput(_) => "SearchInput",
            Action::SuggestionsDidLoad { .. } => "SuggestionsDidLoad",
            Action::SearchHighlightNext => "SearchHighlightNext",
            Action::SearchHighlightPrev => "SearchHighlightPrev",
            Action::SearchCommit => "SearchCommit",
            Action::SearchDismiss => "SearchDismiss",
            Action::FocusSearch => "FocusSearch",
            Action::FocusBody => "FocusBody",
            Action::OpenDetail { .. } => "OpenDetail",
            Action::OpenResults { .. } => "OpenResults",
            Action::GoBack => "GoBack",
            Action::ReloadHome => "ReloadHome",
            Action::HomeDidLoad(_) => "HomeDidLoad",
            Action::HomeDidError(_) => "HomeDidError",
            Action::FilterListsDidLoad { .. } => "FilterListsDidLoad",
            Action::HomeSelect(_) => "HomeSelect",
            Action::CycleCategory => "CycleCategory",
            Action::CycleArea => "CycleArea",
            Action::ToggleFavoritesOnly => "ToggleFavoritesOnly",
            Action::ClearFilters => "ClearFilters",
            Action::ResultsDidLoad { .. } => "ResultsDidLoad",
            Action::ResultsDidError { .. } => "ResultsDidError",
            Action::ResultsSelect(_) => "ResultsSelect",
            Action::DetailDidLoad { .. } => "DetailDidLoad",
            Action::DetailNotFound { .. } => "DetailNotFound",
            Action::DetailDidError { .. } => "DetailDidError",
            Action::ToggleFavorite(_) => "ToggleFavorite",
            Action::ShareRecipe { .. } => "ShareRecipe",
            Action::ExportRecipe => "ExportRecipe",
            Action::ClearRecentSearches => "ClearRecentSearches",
            Action::ToggleDarkMode => "ToggleDarkMode",
            Action::NoticeShow(_) => "NoticeShow",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
