//! Write-once rendering cache shared by the value types.

use std::hash::{Hash, Hasher};

use once_cell::sync::OnceCell;

/// Memoized escaped and unescaped renderings of an immutable value.
///
/// Both slots are filled at most once from a pure function of the owning
/// value, so a racing first render stores an identical string. The cache
/// never takes part in equality or hashing.
#[derive(Debug, Clone, Default)]
pub(crate) struct RenderCache {
    escaped: OnceCell<String>,
    unescaped: OnceCell<String>,
}

impl RenderCache {
    /// Creates a cache whose unescaped slot already holds `unescaped`.
    pub(crate) fn seeded(unescaped: String) -> Self {
        Self {
            escaped: OnceCell::new(),
            unescaped: OnceCell::with_value(unescaped),
        }
    }

    /// Creates a cache whose slots both hold `text`.
    pub(crate) fn seeded_both(text: String) -> Self {
        Self {
            escaped: OnceCell::with_value(text.clone()),
            unescaped: OnceCell::with_value(text),
        }
    }

    /// Returns the cached rendering for `escaped`, computing it on first use.
    pub(crate) fn get_or_render(&self, escaped: bool, render: impl FnOnce() -> String) -> &str {
        let slot = if escaped {
            &self.escaped
        } else {
            &self.unescaped
        };
        slot.get_or_init(render)
    }
}

impl PartialEq for RenderCache {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for RenderCache {}

impl Hash for RenderCache {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}
