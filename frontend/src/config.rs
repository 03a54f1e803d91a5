use shared::constants::{ROOT_API, STORAGE_SESSION_KEY};

use crate::constants::{DATA_API_ROOT, DATA_STORAGE_KEY};
use crate::utils::get_body;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_root: String,
    pub storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: ROOT_API.to_string(),
            storage_key: STORAGE_SESSION_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Overrides come from `data-*` attributes on `<body>`.
    pub fn from_document() -> Self {
        let body = get_body();
        Self::from_lookup(|key| body.as_ref().and_then(|body| body.dataset().get(key)))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let api_root = lookup(DATA_API_ROOT)
            .map(|value| value.trim().trim_matches('/').to_string())
            .filter(|value| !value.is_empty());
        let storage_key = lookup(DATA_STORAGE_KEY)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            api_root: api_root.unwrap_or(defaults.api_root),
            storage_key: storage_key.unwrap_or(defaults.storage_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_root, "api");
        assert_eq!(config.storage_key, "notes-session");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[(DATA_API_ROOT, "/v2/api/"), (DATA_STORAGE_KEY, "my-notes")]));
        assert_eq!(config.api_root, "v2/api");
        assert_eq!(config.storage_key, "my-notes");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup_from(&[(DATA_API_ROOT, " / "), (DATA_STORAGE_KEY, "  ")]));
        assert_eq!(config, ClientConfig::default());
    }
}
