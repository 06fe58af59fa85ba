//! Reducer: all state transitions live here

use tui_shell::{DispatchResult, Remote};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Focus, HISTORY_CAP};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::QueryInput(value) => {
            state.query = value;
            DispatchResult::changed()
        }

        Action::Submit => {
            let city = state.query.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            state.query.clear();
            lookup(state, city, true)
        }

        Action::Lookup { city, record } => lookup(state, city, record),

        Action::WeatherDidLoad { city, reading } => {
            if !is_current(state, &city) {
                return DispatchResult::unchanged();
            }
            state.current = Remote::Ready(reading);
            DispatchResult::changed()
        }

        Action::WeatherDidNotFound { city } => {
            if !is_current(state, &city) {
                return DispatchResult::unchanged();
            }
            state.current = Remote::NotFound;
            DispatchResult::changed()
        }

        Action::WeatherDidError { city, message } => {
            if !is_current(state, &city) {
                return DispatchResult::unchanged();
            }
            state.current = Remote::Failed(message);
            DispatchResult::changed()
        }

        Action::FocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::FocusSearch => {
            if state.focus == Focus::Search {
                return DispatchResult::unchanged();
            }
            state.focus = Focus::Search;
            DispatchResult::changed()
        }

        Action::FavoritesSelect(index) => {
            let clamped = index.min(state.favorites.len().saturating_sub(1));
            if state.favorites_selected == clamped {
                return DispatchResult::unchanged();
            }
            state.favorites_selected = clamped;
            DispatchResult::changed()
        }

        Action::HistorySelect(index) => {
            let clamped = index.min(state.history.len().saturating_sub(1));
            if state.history_selected == clamped {
                return DispatchResult::unchanged();
            }
            state.history_selected = clamped;
            DispatchResult::changed()
        }

        Action::AddFavorite => {
            let Some(reading) = state.current.ready() else {
                return DispatchResult::unchanged();
            };
            let city = reading.city.clone();
            if state
                .favorites
                .iter()
                .any(|f| f.eq_ignore_ascii_case(&city))
            {
                return DispatchResult::unchanged();
            }
            state.favorites.push(city);
            DispatchResult::changed_with(Effect::SaveFavorites {
                cities: state.favorites.clone(),
            })
        }

        Action::RemoveFavorite => {
            if state.favorites_selected >= state.favorites.len() {
                return DispatchResult::unchanged();
            }
            state.favorites.remove(state.favorites_selected);
            state.favorites_selected = state
                .favorites_selected
                .min(state.favorites.len().saturating_sub(1));
            DispatchResult::changed_with(Effect::SaveFavorites {
                cities: state.favorites.clone(),
            })
        }

        Action::ClearHistory => {
            if state.history.is_empty() {
                return DispatchResult::unchanged();
            }
            state.history.clear();
            state.history_selected = 0;
            DispatchResult::changed_with(Effect::SaveHistory {
                entries: Vec::new(),
            })
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn is_current(state: &AppState, city: &str) -> bool {
    state
        .current_city
        .as_deref()
        .is_some_and(|current| current.eq_ignore_ascii_case(city))
}

/// Start a lookup: mark loading, optionally record history, persist the
/// last city, declare the fetch.
fn lookup(state: &mut AppState, city: String, record: bool) -> DispatchResult<Effect> {
    state.current_city = Some(city.clone());
    state.current = Remote::Loading;

    let mut result = DispatchResult::changed_with(Effect::FetchWeather { city: city.clone() })
        .with(Effect::SaveLastCity { city: city.clone() });

    if record {
        push_history(&mut state.history, &city);
        state.history_selected = 0;
        result = result.with(Effect::SaveHistory {
            entries: state.history.clone(),
        });
    }
    result
}

/// Front-insert with case-insensitive dedup, capped at [`HISTORY_CAP`].
pub fn push_history(entries: &mut Vec<String>, entry: &str) {
    let entry = entry.trim();
    if entry.is_empty() {
        return;
    }
    entries.retain(|existing| !existing.eq_ignore_ascii_case(entry));
    entries.insert(0, entry.to_string());
    entries.truncate(HISTORY_CAP);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::WeatherReading;

    fn reading(city: &str) -> WeatherReading {
        WeatherReading {
            city: city.to_string(),
            temp: 18.0,
            feels_like: 17.0,
            humidity: 60,
            wind_speed: 3.2,
            description: "clear sky".into(),
            icon: "01d".into(),
        }
    }

    #[test]
    fn submit_trims_and_starts_lookup() {
        let mut state = AppState::default();
        state.query = "  Paris  ".into();

        let result = reducer(&mut state, Action::Submit);
        assert!(state.current.is_loading());
        assert_eq!(state.current_city.as_deref(), Some("Paris"));
        assert!(state.query.is_empty());
        assert_eq!(state.history, vec!["Paris"]);
        assert!(result.effects.contains(&Effect::FetchWeather {
            city: "Paris".into()
        }));
        assert!(result.effects.contains(&Effect::SaveLastCity {
            city: "Paris".into()
        }));
    }

    #[test]
    fn blank_submit_is_noop() {
        let mut state = AppState::default();
        state.query = "   ".into();
        let result = reducer(&mut state, Action::Submit);
        assert!(!result.changed);
        assert!(state.history.is_empty());
    }

    #[test]
    fn startup_lookup_skips_history() {
        let mut state = AppState::default();
        let result = reducer(
            &mut state,
            Action::Lookup {
                city: "Lyon".into(),
                record: false,
            },
        );
        assert!(state.history.is_empty());
        assert!(!result
            .effects
            .iter()
            .any(|e| matches!(e, Effect::SaveHistory { .. })));
    }

    #[test]
    fn history_sequence_matches_contract() {
        let mut state = AppState::default();
        for city in ["A", "B", "A", "C", "D", "E", "F"] {
            state.query = city.into();
            reducer(&mut state, Action::Submit);
        }
        assert_eq!(state.history, vec!["F", "E", "D", "C", "A"]);
    }

    #[test]
    fn history_dedup_is_case_insensitive() {
        let mut entries = Vec::new();
        push_history(&mut entries, "Paris");
        push_history(&mut entries, "PARIS");
        assert_eq!(entries, vec!["PARIS"]);
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = AppState::default();
        state.query = "Paris".into();
        reducer(&mut state, Action::Submit);
        state.query = "Lyon".into();
        reducer(&mut state, Action::Submit);

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                city: "Paris".into(),
                reading: reading("Paris"),
            },
        );
        assert!(!result.changed);
        assert!(state.current.is_loading());
    }

    #[test]
    fn matching_response_lands() {
        let mut state = AppState::default();
        state.query = "Paris".into();
        reducer(&mut state, Action::Submit);

        reducer(
            &mut state,
            Action::WeatherDidLoad {
                city: "paris".into(),
                reading: reading("Paris"),
            },
        );
        assert_eq!(state.current.ready().map(|r| r.city.as_str()), Some("Paris"));
    }

    #[test]
    fn not_found_is_distinct_from_failure() {
        let mut state = AppState::default();
        state.query = "Atlantis".into();
        reducer(&mut state, Action::Submit);

        reducer(
            &mut state,
            Action::WeatherDidNotFound {
                city: "Atlantis".into(),
            },
        );
        assert_eq!(state.current, Remote::NotFound);
        assert!(!matches!(state.current, Remote::Failed(_)));
    }

    #[test]
    fn favorites_are_case_insensitively_unique() {
        let mut state = AppState::default();
        state.current = Remote::Ready(reading("Paris"));
        state.current_city = Some("Paris".into());

        reducer(&mut state, Action::AddFavorite);
        assert_eq!(state.favorites, vec!["Paris"]);

        state.current = Remote::Ready(reading("paris"));
        let result = reducer(&mut state, Action::AddFavorite);
        assert!(!result.changed);
        assert_eq!(state.favorites, vec!["Paris"]);
    }

    #[test]
    fn add_favorite_requires_loaded_reading() {
        let mut state = AppState::default();
        state.current = Remote::Loading;
        let result = reducer(&mut state, Action::AddFavorite);
        assert!(!result.changed);
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn remove_favorite_clamps_selection() {
        let mut state = AppState::default();
        state.favorites = vec!["Paris".into(), "Lyon".into()];
        state.favorites_selected = 1;

        let result = reducer(&mut state, Action::RemoveFavorite);
        assert_eq!(state.favorites, vec!["Paris"]);
        assert_eq!(state.favorites_selected, 0);
        assert_eq!(
            result.effects,
            vec![Effect::SaveFavorites {
                cities: vec!["Paris".into()]
            }]
        );
    }

    #[test]
    fn clear_history_persists_empty_list() {
        let mut state = AppState::default();
        state.history = vec!["Paris".into()];
        let result = reducer(&mut state, Action::ClearHistory);
        assert!(state.history.is_empty());
        assert_eq!(
            result.effects,
            vec![Effect::SaveHistory {
                entries: Vec::new()
            }]
        );
    }

    #[test]
    fn focus_cycles_through_panels() {
        let mut state = AppState::default();
        assert_eq!(state.focus, Focus::Search);
        reducer(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Favorites);
        reducer(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::History);
        reducer(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Search);
    }

    #[test]
    fn tick_rerenders_only_while_loading() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Tick).changed);
        state.current = Remote::Loading;
        assert!(reducer(&mut state, Action::Tick).changed);
    }
}
