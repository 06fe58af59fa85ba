//! Declarative side effects

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchWeather { city: String },

    // Storage writes, one per persisted key
    SaveLastCity { city: String },
    SaveHistory { entries: Vec<String> },
    SaveFavorites { cities: Vec<String> },
}
