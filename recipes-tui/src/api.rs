//! TheMealDB client
//!
//! Free-tier JSON API. Every endpoint answers `{ "meals": [...] }` where the
//! array is `null` when nothing matched, so "no such recipe" arrives as a
//! successful response and is mapped to [`ApiError::NotFound`] rather than a
//! transport error.

use std::collections::BTreeMap;

use serde::Deserialize;
use tokio::task::JoinSet;
use tracing::{debug, warn};

const BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Recipe API error type
#[derive(Debug)]
pub enum ApiError {
    /// Request failed or the response could not be parsed.
    Request(reqwest::Error),
    /// The API answered but no matching recipe exists.
    NotFound,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "Recipe request failed: {}", e),
            ApiError::NotFound => write!(f, "Recipe not found"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e)
    }
}

/// One recipe record as the API ships it.
///
/// The 20 indexed ingredient/measure columns land in `extra`; use
/// [`Recipe::ingredients`] for the derived pair list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Option<String>>,
}

impl Recipe {
    /// Derive the `(ingredient, measure)` list from the indexed columns.
    ///
    /// Walks indices 1..=20 in order and keeps entries whose ingredient is
    /// non-blank. A blank measure stays as an empty string.
    pub fn ingredients(&self) -> Vec<(String, String)> {
        (1..=20)
            .filter_map(|i| {
                let ingredient = self
                    .extra
                    .get(&format!("strIngredient{i}"))?
                    .as_deref()?
                    .trim();
                if ingredient.is_empty() {
                    return None;
                }
                let measure = self
                    .extra
                    .get(&format!("strMeasure{i}"))
                    .and_then(|m| m.as_deref())
                    .unwrap_or("")
                    .trim();
                Some((ingredient.to_string(), measure.to_string()))
            })
            .collect()
    }

    /// Comma-split tag list, empty when the field is absent.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Public page URL for sharing.
    pub fn share_url(&self) -> String {
        share_url(&self.id)
    }

    /// Plain-text rendering used by the export action.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push('\n');
        out.push_str(&"=".repeat(self.name.chars().count()));
        out.push('\n');

        let mut meta = Vec::new();
        if let Some(category) = &self.category {
            meta.push(category.clone());
        }
        if let Some(area) = &self.area {
            meta.push(area.clone());
        }
        if !meta.is_empty() {
            out.push_str(&meta.join(" / "));
            out.push('\n');
        }
        out.push('\n');

        out.push_str("Ingredients:\n");
        for (name, measure) in self.ingredients() {
            if measure.is_empty() {
                out.push_str(&format!("- {name}\n"));
            } else {
                out.push_str(&format!("- {name} ({measure})\n"));
            }
        }
        out.push('\n');

        if let Some(instructions) = &self.instructions {
            out.push_str(instructions);
            out.push('\n');
        }
        out
    }

    #[cfg(test)]
    pub fn set_extra(&mut self, key: &str, value: Option<&str>) {
        self.extra
            .insert(key.to_string(), value.map(str::to_string));
    }
}

/// Public page URL for a recipe id.
pub fn share_url(id: &str) -> String {
    format!("https://www.themealdb.com/meal/{id}")
}

#[derive(Debug, Deserialize)]
struct MealsResponse {
    meals: Option<Vec<Recipe>>,
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    #[serde(rename = "strCategory")]
    category: String,
}

#[derive(Debug, Deserialize)]
struct AreaRow {
    #[serde(rename = "strArea")]
    area: String,
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    meals: Option<Vec<CategoryRow>>,
}

#[derive(Debug, Deserialize)]
struct AreasResponse {
    meals: Option<Vec<AreaRow>>,
}

/// TheMealDB HTTP client. Cheap to clone; the inner client is shared.
#[derive(Clone)]
pub struct MealDb {
    http: reqwest::Client,
    base: String,
}

impl Default for MealDb {
    fn default() -> Self {
        Self::new()
    }
}

impl MealDb {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base: BASE_URL.to_string(),
        }
    }

    /// Search recipes by name. An empty `meals` array or `null` is an empty
    /// result, not an error.
    pub async fn search(&self, name: &str) -> Result<Vec<Recipe>, ApiError> {
        let url = format!("{}/search.php?s={}", self.base, urlencoding::encode(name));
        debug!(%name, "recipe search");
        let data: MealsResponse = self.http.get(&url).send().await?.json().await?;
        Ok(data.meals.unwrap_or_default())
    }

    /// Look up a single recipe by id. `null` meals means the id does not
    /// exist and maps to [`ApiError::NotFound`].
    pub async fn lookup(&self, id: &str) -> Result<Recipe, ApiError> {
        let url = format!("{}/lookup.php?i={}", self.base, urlencoding::encode(id));
        debug!(%id, "recipe lookup");
        let data: MealsResponse = self.http.get(&url).send().await?.json().await?;
        data.meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or(ApiError::NotFound)
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/list.php?c=list", self.base);
        let data: CategoriesResponse = self.http.get(&url).send().await?.json().await?;
        Ok(data
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.category)
            .collect())
    }

    pub async fn list_areas(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/list.php?a=list", self.base);
        let data: AreasResponse = self.http.get(&url).send().await?.json().await?;
        Ok(data
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.area)
            .collect())
    }

    pub async fn random(&self) -> Result<Recipe, ApiError> {
        let url = format!("{}/random.php", self.base);
        let data: MealsResponse = self.http.get(&url).send().await?.json().await?;
        data.meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or(ApiError::NotFound)
    }

    /// Fetch `n` random recipes concurrently and keep whatever succeeded.
    ///
    /// One failed request must not take down the whole batch; failures are
    /// logged and dropped from the merged list.
    pub async fn random_batch(&self, n: usize) -> Vec<Recipe> {
        let mut set = JoinSet::new();
        for _ in 0..n {
            let client = self.clone();
            set.spawn(async move { client.random().await });
        }

        let mut recipes = Vec::with_capacity(n);
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(Ok(recipe)) => recipes.push(recipe),
                Ok(Err(e)) => warn!(%e, "random recipe fetch failed"),
                Err(e) => warn!(%e, "random recipe task failed"),
            }
        }
        recipes
    }
}
