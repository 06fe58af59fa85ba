//! UI components: search input, current-weather panel, city lists

mod city_lists;
mod search_panel;
mod weather_panel;

pub use city_lists::{CityLists, CityListsProps};
pub use search_panel::{SearchPanel, SearchPanelProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
