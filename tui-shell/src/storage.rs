//! Persisted user preferences
//!
//! A small JSON object on disk holding the handful of keys each app cares
//! about (favorites, history, theme). Loaded once at startup, rewritten in
//! full on every mutation; there is no batching and no partial update. A
//! missing or corrupt file degrades to an empty store rather than failing
//! startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// File-backed key-value store for user preferences.
///
/// Values are JSON-encoded at the boundary; callers work with typed values.
pub struct Storage {
    path: Option<PathBuf>,
    values: BTreeMap<String, Value>,
}

impl Storage {
    /// Open (or create) the store at `path`.
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(values) => values,
                Err(err) => {
                    warn!(path = %path.display(), %err, "preference file corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self {
            path: Some(path),
            values,
        }
    }

    /// A store that never touches disk. Used in tests and by `--ephemeral`.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: BTreeMap::new(),
        }
    }

    /// Read and decode a value. `None` when absent or undecodable.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!(key, %err, "stored value has unexpected shape");
                None
            }
        }
    }

    /// Encode and store a value, rewriting the file immediately.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(encoded) => {
                self.values.insert(key.to_string(), encoded);
                self.flush();
            }
            Err(err) => warn!(key, %err, "could not encode value"),
        }
    }

    /// Remove a key, rewriting the file immediately.
    pub fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.flush();
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn flush(&self) {
        let Some(path) = &self.path else {
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), %err, "could not create preference dir");
                return;
            }
        }

        match serde_json::to_string_pretty(&self.values) {
            Ok(text) => {
                if let Err(err) = fs::write(path, text) {
                    warn!(path = %path.display(), %err, "could not write preferences");
                }
            }
            Err(err) => warn!(%err, "could not serialize preferences"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("tui-shell-tests")
            .join(format!("{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn get_set_round_trip() {
        let mut store = Storage::in_memory();

        assert_eq!(store.get::<Vec<String>>("favorites"), None);

        store.set("favorites", &vec!["52772".to_string()]);
        assert_eq!(
            store.get::<Vec<String>>("favorites"),
            Some(vec!["52772".to_string()])
        );

        store.set("darkMode", &true);
        assert_eq!(store.get::<bool>("darkMode"), Some(true));
    }

    #[test]
    fn remove_deletes_key() {
        let mut store = Storage::in_memory();
        store.set("searchHistory", &vec!["Paris".to_string()]);
        assert!(store.contains("searchHistory"));

        store.remove("searchHistory");
        assert!(!store.contains("searchHistory"));
        assert_eq!(store.get::<Vec<String>>("searchHistory"), None);
    }

    #[test]
    fn wrong_shape_reads_as_none() {
        let mut store = Storage::in_memory();
        store.set("darkMode", &true);
        assert_eq!(store.get::<Vec<String>>("darkMode"), None);
    }

    #[test]
    fn persists_across_reopen() {
        let path = temp_path("reopen");
        let _ = fs::remove_file(&path);

        {
            let mut store = Storage::open(path.clone());
            store.set("lastCity", &"Lyon".to_string());
        }

        let store = Storage::open(path.clone());
        assert_eq!(store.get::<String>("lastCity"), Some("Lyon".to_string()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let store = Storage::open(path.clone());
        assert!(!store.contains("favorites"));

        let _ = fs::remove_file(&path);
    }
}
