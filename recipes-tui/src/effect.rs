//! Declarative side effects returned by the reducer
//!
//! The reducer never performs IO; it describes the work and the effect
//! handler in `main` spawns it on the task manager or runs it inline
//! (storage writes, clipboard).

use crate::api::Recipe;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Debounced type-ahead search. An effective query shorter than two
    /// characters cancels the pending request instead of issuing one.
    SuggestSearch { query: String },
    /// Full search for the results screen.
    SearchFull { query: String },
    /// Single-recipe lookup for the detail screen.
    FetchDetail { id: String },
    /// Concurrent random-recipe batch for the home screen.
    LoadHome,
    /// Category and area lists for the home filters.
    FetchFilterLists,

    /// Copy text to the system clipboard. Failure is swallowed.
    CopyToClipboard { text: String },
    /// Write a plain-text rendering of the recipe to the data dir.
    ExportRecipe { recipe: Box<Recipe> },

    // Storage writes, one per persisted key
    SaveFavorites { favorites: Vec<String> },
    SaveRecentSearches { entries: Vec<String> },
    SaveDarkMode { enabled: bool },
}
