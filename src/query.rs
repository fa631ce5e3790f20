//! Query type for URLs.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::encoding::encode_component;
use crate::render::RenderCache;

/// Strategy used by [`Url::parse_with_options`](crate::Url::parse_with_options)
/// to turn the raw query string (without `?`) into a [`Query`].
pub type QueryParser = Arc<dyn Fn(&str) -> Option<Query> + Send + Sync>;

/// Key-value pairs from a query string.
///
/// Keys are unique and kept sorted, so rendering is stable regardless of the
/// order in which pairs were parsed or set. Keys and values are stored as
/// written; escaped rendering percent-encodes them.
///
/// # Examples
///
/// ```
/// use typed_url::Query;
///
/// let query = Query::parse("?page=2&sort=name").unwrap();
/// assert_eq!(query.get("page"), Some("2"));
///
/// let query = query.set("page", "3").unset("sort");
/// assert_eq!(query.to_string(), "page=3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    entries: BTreeMap<String, String>,
    rendered: RenderCache,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string, with or without a leading `?`.
    ///
    /// Pairs are separated by `&` and split on their first `=`; a pair
    /// without `=` has an empty value. Empty pairs are skipped and later
    /// duplicates overwrite earlier ones. Every input is accepted.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.strip_prefix('?').unwrap_or(input);

        let entries = input
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (key.to_string(), value.to_string())
            })
            .collect();

        Some(Self::from_entries(entries))
    }

    /// Returns the parser used when no custom [`QueryParser`] is configured.
    #[must_use]
    pub fn default_parser() -> QueryParser {
        Arc::new(Self::parse)
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the entries.
    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Returns true if the query has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a new query with transformed entries.
    #[must_use]
    pub fn with_entries(&self, transform: impl FnOnce(&mut BTreeMap<String, String>)) -> Self {
        let mut entries = self.entries.clone();
        transform(&mut entries);
        Self::from_entries(entries)
    }

    /// Returns a new query with `key` set to `value`.
    #[must_use]
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_entries(|entries| {
            entries.insert(key.into(), value.into());
        })
    }

    /// Returns a new query with all given pairs set, overwriting existing keys.
    #[must_use]
    pub fn set_many<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.with_entries(|entries| {
            entries.extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        })
    }

    /// Returns a new query with `other`'s entries set on top of this one.
    #[must_use]
    pub fn merge(&self, other: &Query) -> Self {
        self.set_many(other.iter())
    }

    /// Returns a new query without `key`.
    #[must_use]
    pub fn unset(&self, key: &str) -> Self {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    /// Returns a new query without any of `keys`.
    #[must_use]
    pub fn unset_many<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        self.with_entries(|entries| {
            for key in keys {
                entries.remove(key);
            }
        })
    }

    /// Renders `key=value` pairs joined by `&`; escaped mode percent-encodes
    /// each key and value.
    #[must_use]
    pub fn render(&self, escaped: bool) -> &str {
        self.rendered.get_or_render(escaped, || {
            self.entries
                .iter()
                .map(|(key, value)| {
                    if escaped {
                        format!("{}={}", encode_component(key), encode_component(value))
                    } else {
                        format!("{key}={value}")
                    }
                })
                .collect::<Vec<_>>()
                .join("&")
        })
    }

    /// Renders like [`Self::render`], prefixed with `?` when requested.
    #[must_use]
    pub fn render_with_separator(&self, escaped: bool, prepend_separator: bool) -> Cow<'_, str> {
        let output = self.render(escaped);
        if prepend_separator {
            Cow::Owned(format!("?{output}"))
        } else {
            Cow::Borrowed(output)
        }
    }

    fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries,
            rendered: RenderCache::default(),
        }
    }
}

impl From<BTreeMap<String, String>> for Query {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self::from_entries(entries)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render(f.alternate()))
    }
}

impl FromStr for Query {
    type Err = crate::UrlParseFailureReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(crate::UrlParseFailureReason::InvalidQuery)
    }
}

impl TryFrom<&str> for Query {
    type Error = crate::UrlParseFailureReason;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.render(false))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Query {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
