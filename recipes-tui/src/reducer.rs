//! Reducer: all state transitions live here
//!
//! Pure function of (state, action). Side effects are declared, never
//! performed. Async result actions carry the query/id they were issued for
//! and are dropped when they no longer match the current state.

use tui_shell::{DispatchResult, Remote};

use crate::action::Action;
use crate::api::{self, Recipe};
use crate::effect::Effect;
use crate::state::{AppState, Route, RECENT_SEARCH_CAP, SUGGESTION_CAP};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search bar =====
        Action::SearchInput(value) => {
            state.notice = None;
            state.search.query = value.clone();
            state.search.highlighted = None;

            let effective = value.trim();
            if effective.is_empty() {
                state.search.suggestions.clear();
                state.search.loading = false;
            } else if effective.chars().count() >= 2 {
                state.search.loading = true;
            }
            // A single character leaves the list untouched; the effect still
            // goes out so a pending request for older input is cancelled.
            DispatchResult::changed_with(Effect::SuggestSearch { query: value })
        }

        Action::SuggestionsDidLoad { query, recipes } => {
            if !query.trim().eq_ignore_ascii_case(state.search.query.trim()) {
                return DispatchResult::unchanged();
            }
            state.search.loading = false;
            state.search.suggestions = rank_suggestions(&query, recipes);
            state.search.highlighted = None;
            DispatchResult::changed()
        }

        Action::SearchHighlightNext => {
            if state.search.suggestions.is_empty() {
                return DispatchResult::unchanged();
            }
            let last = state.search.suggestions.len() - 1;
            let next = match state.search.highlighted {
                None => 0,
                Some(i) => (i + 1).min(last),
            };
            if state.search.highlighted == Some(next) {
                return DispatchResult::unchanged();
            }
            state.search.highlighted = Some(next);
            DispatchResult::changed()
        }

        Action::SearchHighlightPrev => match state.search.highlighted {
            None => DispatchResult::unchanged(),
            Some(0) => {
                state.search.highlighted = None;
                DispatchResult::changed()
            }
            Some(i) => {
                state.search.highlighted = Some(i - 1);
                DispatchResult::changed()
            }
        },

        Action::SearchCommit => {
            if let Some(recipe) = state
                .search
                .highlighted
                .and_then(|i| state.search.suggestions.get(i))
                .cloned()
            {
                state.search.query = recipe.name.clone();
                state.search.suggestions.clear();
                state.search.highlighted = None;
                state.search.focused = false;
                push_recent(&mut state.recent_searches, &recipe.name);
                return navigate(state, Route::Detail { id: recipe.id })
                    .with(Effect::SaveRecentSearches {
                        entries: state.recent_searches.clone(),
                    });
            }

            let query = state.search.query.trim().to_string();
            if query.is_empty() {
                return DispatchResult::unchanged();
            }
            state.search.suggestions.clear();
            state.search.highlighted = None;
            state.search.focused = false;
            push_recent(&mut state.recent_searches, &query);
            navigate(state, Route::Results { query }).with(Effect::SaveRecentSearches {
                entries: state.recent_searches.clone(),
            })
        }

        Action::SearchDismiss => {
            state.search.suggestions.clear();
            state.search.highlighted = None;
            state.search.focused = false;
            state.search.loading = false;
            DispatchResult::changed_with(Effect::SuggestSearch {
                query: String::new(),
            })
        }

        Action::FocusSearch => {
            if state.search.focused {
                return DispatchResult::unchanged();
            }
            state.search.focused = true;
            DispatchResult::changed()
        }

        // The terminal analog of clicking outside the search bar: moving
        // focus away closes the dropdown.
        Action::FocusBody => {
            if !state.search.focused {
                return DispatchResult::unchanged();
            }
            state.search.focused = false;
            state.search.suggestions.clear();
            state.search.highlighted = None;
            DispatchResult::changed()
        }

        // ===== Navigation =====
        Action::OpenDetail { id, name } => {
            state.notice = None;
            let mut result = navigate(state, Route::Detail { id });
            if let Some(name) = name {
                push_recent(&mut state.recent_searches, &name);
                result = result.with(Effect::SaveRecentSearches {
                    entries: state.recent_searches.clone(),
                });
            }
            result
        }

        Action::OpenResults { query } => {
            state.notice = None;
            navigate(state, Route::Results { query })
        }

        Action::GoBack => match state.back_stack.pop() {
            Some(route) => {
                if matches!(state.route, Route::Detail { .. }) {
                    state.detail = Remote::Idle;
                }
                state.route = route;
                state.notice = None;
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        // ===== Home =====
        Action::ReloadHome => {
            state.home.recipes = Remote::Loading;
            state.home.filtered.clear();
            state.home.selected = 0;
            DispatchResult::changed_with_many(vec![Effect::LoadHome, Effect::FetchFilterLists])
        }

        Action::HomeDidLoad(recipes) => {
            state.home.recipes = Remote::Ready(recipes);
            recompute_home_filter(state);
            state.home.selected = 0;
            DispatchResult::changed()
        }

        Action::HomeDidError(message) => {
            state.home.recipes = Remote::Failed(message);
            state.home.filtered.clear();
            DispatchResult::changed()
        }

        Action::FilterListsDidLoad { categories, areas } => {
            state.home.categories = categories;
            state.home.areas = areas;
            DispatchResult::changed()
        }

        Action::HomeSelect(index) => {
            let clamped = index.min(state.home.filtered.len().saturating_sub(1));
            if state.home.selected == clamped {
                return DispatchResult::unchanged();
            }
            state.home.selected = clamped;
            DispatchResult::changed()
        }

        Action::CycleCategory => {
            state.home.category_filter =
                cycle_filter(&state.home.categories, state.home.category_filter.take());
            recompute_home_filter(state);
            state.home.selected = 0;
            DispatchResult::changed()
        }

        Action::CycleArea => {
            state.home.area_filter =
                cycle_filter(&state.home.areas, state.home.area_filter.take());
            recompute_home_filter(state);
            state.home.selected = 0;
            DispatchResult::changed()
        }

        Action::ToggleFavoritesOnly => {
            state.home.favorites_only = !state.home.favorites_only;
            recompute_home_filter(state);
            state.home.selected = 0;
            DispatchResult::changed()
        }

        Action::ClearFilters => {
            if !state.home.has_active_filter() {
                return DispatchResult::unchanged();
            }
            state.home.category_filter = None;
            state.home.area_filter = None;
            state.home.favorites_only = false;
            recompute_home_filter(state);
            state.home.selected = 0;
            DispatchResult::changed()
        }

        // ===== Results =====
        Action::ResultsDidLoad { query, recipes } => {
            if state.route != (Route::Results { query }) {
                return DispatchResult::unchanged();
            }
            state.results.recipes = Remote::Ready(recipes);
            state.results.selected = 0;
            DispatchResult::changed()
        }

        Action::ResultsDidError { query, message } => {
            if state.route != (Route::Results { query }) {
                return DispatchResult::unchanged();
            }
            state.results.recipes = Remote::Failed(message);
            DispatchResult::changed()
        }

        Action::ResultsSelect(index) => {
            let len = state
                .results
                .recipes
                .ready()
                .map(Vec::len)
                .unwrap_or_default();
            let clamped = index.min(len.saturating_sub(1));
            if state.results.selected == clamped {
                return DispatchResult::unchanged();
            }
            state.results.selected = clamped;
            DispatchResult::changed()
        }

        // ===== Detail =====
        Action::DetailDidLoad { id, recipe } => {
            if state.route != (Route::Detail { id }) {
                return DispatchResult::unchanged();
            }
            state.detail = Remote::Ready(*recipe);
            DispatchResult::changed()
        }

        Action::DetailNotFound { id } => {
            if state.route != (Route::Detail { id }) {
                return DispatchResult::unchanged();
            }
            state.detail = Remote::NotFound;
            DispatchResult::changed()
        }

        Action::DetailDidError { id, message } => {
            if state.route != (Route::Detail { id }) {
                return DispatchResult::unchanged();
            }
            state.detail = Remote::Failed(message);
            DispatchResult::changed()
        }

        // ===== Collections and preferences =====
        Action::ToggleFavorite(id) => {
            if !state.favorites.remove(&id) {
                state.favorites.insert(id);
            }
            if state.home.favorites_only {
                recompute_home_filter(state);
                state.home.selected = state
                    .home
                    .selected
                    .min(state.home.filtered.len().saturating_sub(1));
            }
            let mut favorites: Vec<String> = state.favorites.iter().cloned().collect();
            favorites.sort();
            DispatchResult::changed_with(Effect::SaveFavorites { favorites })
        }

        Action::ShareRecipe { id } => DispatchResult::effect(Effect::CopyToClipboard {
            text: api::share_url(&id),
        }),

        Action::ExportRecipe => match state.detail.ready() {
            Some(recipe) => DispatchResult::effect(Effect::ExportRecipe {
                recipe: Box::new(recipe.clone()),
            }),
            None => DispatchResult::unchanged(),
        },

        Action::ClearRecentSearches => {
            if state.recent_searches.is_empty() {
                return DispatchResult::unchanged();
            }
            state.recent_searches.clear();
            DispatchResult::changed_with(Effect::SaveRecentSearches {
                entries: Vec::new(),
            })
        }

        Action::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            DispatchResult::changed_with(Effect::SaveDarkMode {
                enabled: state.dark_mode,
            })
        }

        Action::NoticeShow(message) => {
            state.notice = Some(message);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is handled by the runtime's should_quit predicate
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Push the current route and enter a new one, declaring its fetch.
fn navigate(state: &mut AppState, route: Route) -> DispatchResult<Effect> {
    let previous = std::mem::replace(&mut state.route, route.clone());
    if previous != route {
        state.back_stack.push(previous);
    }

    match route {
        Route::Home => DispatchResult::changed(),
        Route::Results { query } => {
            state.results.recipes = Remote::Loading;
            state.results.selected = 0;
            DispatchResult::changed_with(Effect::SearchFull { query })
        }
        Route::Detail { id } => {
            state.detail = Remote::Loading;
            DispatchResult::changed_with(Effect::FetchDetail { id })
        }
    }
}

/// Order suggestions: prefix matches first, then substring-only matches,
/// original order preserved within each group, at most [`SUGGESTION_CAP`].
/// Entries that do not contain the query at all are dropped.
pub fn rank_suggestions(query: &str, recipes: Vec<Recipe>) -> Vec<Recipe> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut prefix = Vec::new();
    let mut substring = Vec::new();
    for recipe in recipes {
        let name = recipe.name.to_lowercase();
        if name.starts_with(&needle) {
            prefix.push(recipe);
        } else if name.contains(&needle) {
            substring.push(recipe);
        }
    }

    prefix.extend(substring);
    prefix.truncate(SUGGESTION_CAP);
    prefix
}

/// Front-insert with case-insensitive dedup, capped at
/// [`RECENT_SEARCH_CAP`] entries.
pub fn push_recent(entries: &mut Vec<String>, entry: &str) {
    let entry = entry.trim();
    if entry.is_empty() {
        return;
    }
    entries.retain(|existing| !existing.eq_ignore_ascii_case(entry));
    entries.insert(0, entry.to_string());
    entries.truncate(RECENT_SEARCH_CAP);
}

/// Advance an optional filter through its value list: none, each value in
/// order, back to none.
fn cycle_filter(values: &[String], current: Option<String>) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    match current {
        None => Some(values[0].clone()),
        Some(value) => {
            let pos = values.iter().position(|v| *v == value);
            match pos {
                Some(i) if i + 1 < values.len() => Some(values[i + 1].clone()),
                _ => None,
            }
        }
    }
}

/// Recompute the visible index list from the base list and active filters.
/// Filters are conjunctive; no active filter means every index passes.
fn recompute_home_filter(state: &mut AppState) {
    let home = &mut state.home;
    home.filtered.clear();
    let Some(recipes) = home.recipes.ready() else {
        return;
    };

    for (i, recipe) in recipes.iter().enumerate() {
        if let Some(category) = &home.category_filter {
            if recipe.category.as_deref() != Some(category.as_str()) {
                continue;
            }
        }
        if let Some(area) = &home.area_filter {
            if recipe.area.as_deref() != Some(area.as_str()) {
                continue;
            }
        }
        if home.favorites_only && !state.favorites.contains(&recipe.id) {
            continue;
        }
        home.filtered.push(i);
    }
}
