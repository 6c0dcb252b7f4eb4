//! Translation dictionaries and dotted-key lookup.
//!
//! # Responsibilities
//! - Load one nested JSON dictionary per locale at startup
//! - Resolve dotted keys (`home.hero.title`) with default-locale fallback
//! - Report keys the secondary dictionaries are missing
//!
//! # Design Decisions
//! - Dictionaries are immutable once loaded and shared via `Arc<Catalog>`
//! - Lookup never fails loudly: absence is `None`, callers pick a literal
//! - A miss at ANY segment restarts the whole descent in the default
//!   dictionary; the requested locale is never consulted again for that key
//! - Values are returned untyped (`serde_json::Value`); callers decide
//!   whether they expect a string, a list, or a nested object

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::i18n::Locale;

const EMBEDDED_EL: &str = include_str!("../../messages/el.json");
const EMBEDDED_EN: &str = include_str!("../../messages/en.json");

/// Errors raised while loading dictionaries.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{locale}' dictionary: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{0}' dictionary must be a JSON object at the top level")]
    NotAnObject(Locale),

    #[error("no dictionary provided for locale '{0}'")]
    MissingLocale(Locale),
}

/// All translation dictionaries, one per locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    dictionaries: HashMap<Locale, Value>,
}

impl Catalog {
    /// Load `<dir>/<code>.json` for every supported locale.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let mut dictionaries = HashMap::new();
        for locale in Locale::ALL {
            let path = dir.join(format!("{}.json", locale.code()));
            let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            dictionaries.insert(locale, parse_dictionary(locale, &content)?);
        }
        Self::from_values(dictionaries)
    }

    /// Dictionaries compiled into the binary from `messages/`.
    pub fn embedded() -> Result<Self, CatalogError> {
        let dictionaries = HashMap::from([
            (Locale::El, parse_dictionary(Locale::El, EMBEDDED_EL)?),
            (Locale::En, parse_dictionary(Locale::En, EMBEDDED_EN)?),
        ]);
        Self::from_values(dictionaries)
    }

    /// Build a catalog from already-parsed dictionaries.
    ///
    /// Every supported locale must be present and every dictionary must be
    /// an object.
    pub fn from_values(
        dictionaries: impl IntoIterator<Item = (Locale, Value)>,
    ) -> Result<Self, CatalogError> {
        let dictionaries: HashMap<Locale, Value> = dictionaries.into_iter().collect();
        for locale in Locale::ALL {
            match dictionaries.get(&locale) {
                None => return Err(CatalogError::MissingLocale(locale)),
                Some(value) if !value.is_object() => {
                    return Err(CatalogError::NotAnObject(locale))
                }
                Some(_) => {}
            }
        }
        Ok(Self { dictionaries })
    }

    fn dictionary(&self, locale: Locale) -> &Value {
        // from_values guarantees every locale is present
        &self.dictionaries[&locale]
    }

    /// Look up a dotted key in `locale`, falling back to the default locale.
    ///
    /// Returns `None` when the key is absent from both dictionaries.
    pub fn translate(&self, locale: Locale, key: &str) -> Option<&Value> {
        let segments: Vec<&str> = key.split('.').collect();
        descend(self.dictionary(locale), &segments)
            .or_else(|| descend(self.dictionary(Locale::DEFAULT), &segments))
    }

    /// A lookup handle bound to one locale.
    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator {
            catalog: self,
            locale,
        }
    }

    /// Dotted paths of leaf values the default dictionary has and `locale`
    /// lacks. Lists count as leaves. Sorted.
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        let mut leaves = Vec::new();
        collect_leaves(self.dictionary(Locale::DEFAULT), String::new(), &mut leaves);

        let target = self.dictionary(locale);
        let mut missing: Vec<String> = leaves
            .into_iter()
            .filter(|path| {
                let segments: Vec<&str> = path.split('.').collect();
                descend(target, &segments).is_none()
            })
            .collect();
        missing.sort();
        missing
    }
}

/// Lookup handle returned by [`Catalog::translator`].
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    locale: Locale,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> Option<&'a Value> {
        self.catalog.translate(self.locale, key)
    }

    /// String at `key`, or `fallback` when the key is absent or not a string.
    pub fn text(&self, key: &str, fallback: &str) -> String {
        self.t(key)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    }
}

fn parse_dictionary(locale: Locale, content: &str) -> Result<Value, CatalogError> {
    let value: Value =
        serde_json::from_str(content).map_err(|source| CatalogError::Parse { locale, source })?;
    if !value.is_object() {
        return Err(CatalogError::NotAnObject(locale));
    }
    Ok(value)
}

fn descend<'v>(root: &'v Value, segments: &[&str]) -> Option<&'v Value> {
    segments
        .iter()
        .try_fold(root, |current, segment| child(current, segment))
}

/// Objects are indexed by key, lists by canonical decimal index.
fn child<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => {
            let index: usize = segment.parse().ok()?;
            if index.to_string() != segment {
                return None;
            }
            items.get(index)
        }
        _ => None,
    }
}

fn collect_leaves(value: &Value, prefix: String, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaves(child, path, out);
            }
        }
        _ if !prefix.is_empty() => out.push(prefix),
        _ => {}
    }
}
