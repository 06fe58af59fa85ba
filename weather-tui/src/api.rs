//! OpenWeatherMap client
//!
//! Single endpoint: current weather by city name, metric units. A 404
//! means the city name did not resolve and is kept distinct from transport
//! failures, since the UI words the two differently.

use serde::Deserialize;
use tracing::debug;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug)]
pub enum ApiError {
    /// Request failed or the response could not be parsed.
    Request(reqwest::Error),
    /// HTTP 404: the city name did not resolve.
    CityNotFound(String),
    /// Any other non-success status (bad API key, rate limit).
    Status(u16),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "Weather request failed: {}", e),
            ApiError::CityNotFound(city) => write!(f, "City not found: {}", city),
            ApiError::Status(code) => write!(f, "Weather service answered {}", code),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e)
    }
}

/// Snapshot of one API response. Never merged across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Canonical city name as the API reports it.
    pub city: String,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    main: MainBlock,
    wind: WindBlock,
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    description: String,
    icon: String,
}

impl From<WeatherResponse> for WeatherReading {
    fn from(response: WeatherResponse) -> Self {
        let condition = response.weather.into_iter().next();
        Self {
            city: response.name,
            temp: response.main.temp,
            feels_like: response.main.feels_like,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
            description: condition
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            icon: condition.map(|c| c.icon).unwrap_or_default(),
        }
    }
}

/// OpenWeatherMap HTTP client. Cheap to clone.
#[derive(Clone)]
pub struct OpenWeather {
    http: reqwest::Client,
    api_key: String,
}

impl OpenWeather {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Current weather for a city name, metric units.
    pub async fn current(&self, city: &str) -> Result<WeatherReading, ApiError> {
        let url = format!(
            "{}?q={}&appid={}&units=metric",
            BASE_URL,
            urlencoding::encode(city),
            self.api_key
        );
        debug!(%city, "weather lookup");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status.as_u16() == 404 {
            return Err(ApiError::CityNotFound(city.to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let data: WeatherResponse = response.json().await?;
        Ok(data.into())
    }
}
