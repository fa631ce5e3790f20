//! Path type: an ordered sequence of `/`-separated segments.
//!
//! ```text
//! path     = "/" segment *( "/" segment )
//! rootless = segment *( "/" segment )
//! ```
//!
//! A path ending in a single `/` has that separator dropped; a path ending
//! in `//` keeps a final empty segment. Rootless paths only occur as the
//! opaque part of URLs whose protocol has no authority section (`tel:+1234`).

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::encoding::encode_component;
use crate::render::RenderCache;

/// A URL path.
///
/// # Examples
///
/// ```
/// use typed_url::Path;
///
/// let path = Path::parse("/users/42").unwrap();
/// assert_eq!(path.segments(), ["users", "42"]);
///
/// let template = Path::parse("/users/[id]").unwrap();
/// let params = template.match_path(&path).unwrap();
/// assert_eq!(params.get("id").map(String::as_str), Some("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
    rooted: bool,
    rendered: RenderCache,
}

impl Path {
    /// Creates a rooted path from segments.
    #[must_use]
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self::from_parts(segments.into_iter().map(Into::into).collect(), true)
    }

    /// The root path `/` with no segments.
    #[must_use]
    pub fn root() -> Self {
        Self::from_parts(Vec::new(), true)
    }

    /// Parses a path that starts with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_url::Path;
    ///
    /// assert!(Path::parse("/").unwrap().is_empty());
    /// assert_eq!(Path::parse("/a/").unwrap().segments(), ["a"]);
    /// assert_eq!(Path::parse("/a//").unwrap().segments(), ["a", ""]);
    /// assert!(Path::parse("a/b").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if !input.starts_with('/') {
            return None;
        }
        Some(Self::from_parts(Self::split_segments(input), true))
    }

    /// Parses the opaque, rootless form used after `protocol:`.
    ///
    /// Returns `None` for empty input or input starting with `/`.
    #[must_use]
    pub fn parse_rootless(input: &str) -> Option<Self> {
        if input.is_empty() || input.starts_with('/') {
            return None;
        }
        Some(Self::from_parts(Self::split_segments(&format!("/{input}")), false))
    }

    /// Returns the segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if the path starts with `/`.
    #[must_use]
    pub const fn is_rooted(&self) -> bool {
        self.rooted
    }

    /// Returns true if the last segment is empty, i.e. the path renders with
    /// a trailing `/`.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        self.segments.last().is_some_and(String::is_empty)
    }

    /// Renders the path; escaped mode percent-encodes each segment.
    #[must_use]
    pub fn render(&self, escaped: bool) -> &str {
        self.rendered.get_or_render(escaped, || {
            let mut output = String::new();
            for segment in &self.segments {
                output.push('/');
                if escaped {
                    output.push_str(&encode_component(segment));
                } else {
                    output.push_str(segment);
                }
            }
            if self.segments.is_empty() || self.has_trailing_separator() {
                output.push('/');
            }
            if !self.rooted {
                output.remove(0);
            }
            output
        })
    }

    /// Renders like [`Self::render`], appending `/` when requested and the
    /// last segment is not already empty. The root path is returned as is.
    #[must_use]
    pub fn render_with_trailing_separator(
        &self,
        escaped: bool,
        force_trailing_separator: bool,
    ) -> Cow<'_, str> {
        let output = self.render(escaped);
        if force_trailing_separator && !self.is_empty() && !self.has_trailing_separator() {
            Cow::Owned(format!("{output}/"))
        } else {
            Cow::Borrowed(output)
        }
    }

    /// Returns a new path with transformed segments.
    #[must_use]
    pub fn with_segments(&self, transform: impl FnOnce(&mut Vec<String>)) -> Self {
        let mut segments = self.segments.clone();
        transform(&mut segments);
        Self::from_parts(segments, self.rooted)
    }

    /// Returns this path followed by the segments of `other`.
    #[must_use]
    pub fn append(&self, other: &Path) -> Self {
        self.with_segments(|segments| segments.extend_from_slice(&other.segments))
    }

    /// Returns the segments of `other` followed by this path.
    #[must_use]
    pub fn prepend(&self, other: &Path) -> Self {
        other.append(self)
    }

    /// Returns a new path without the segments in `start..end`.
    ///
    /// `end` defaults to the segment count; both bounds are clamped and an
    /// empty or inverted range removes nothing.
    #[must_use]
    pub fn remove(&self, start: usize, end: Option<usize>) -> Self {
        let len = self.segments.len();
        let end = end.unwrap_or(len).min(len);
        let start = start.min(end);
        self.with_segments(|segments| {
            segments.drain(start..end);
        })
    }

    /// Returns true if `prefix`'s segments are a prefix of this path's.
    #[must_use]
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Returns true if `suffix`'s segments are a suffix of this path's.
    #[must_use]
    pub fn ends_with(&self, suffix: &Path) -> bool {
        self.segments.ends_with(&suffix.segments)
    }

    /// Matches a concrete path against this template, using `[name]`
    /// segments as parameters.
    ///
    /// See [`Self::match_path_with`].
    #[must_use]
    pub fn match_path(&self, concrete: &Path) -> Option<BTreeMap<String, String>> {
        self.match_path_with(concrete, bracket_parameter)
    }

    /// Matches a concrete path against this template.
    ///
    /// `extractor` is applied to each template segment. When it yields a
    /// name, the concrete segment at the same position is captured under
    /// that name; otherwise both segments must be equal. Returns `None` if
    /// the segment counts differ or any literal segment differs.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_url::Path;
    ///
    /// let template = Path::parse("/files/:name").unwrap();
    /// let concrete = Path::parse("/files/readme").unwrap();
    /// let params = template
    ///     .match_path_with(&concrete, |segment| segment.strip_prefix(':').map(str::to_string))
    ///     .unwrap();
    /// assert_eq!(params["name"], "readme");
    /// ```
    #[must_use]
    pub fn match_path_with<F>(&self, concrete: &Path, extractor: F) -> Option<BTreeMap<String, String>>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.segments.len() != concrete.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (template, value) in self.segments.iter().zip(&concrete.segments) {
            match extractor(template) {
                Some(name) => {
                    params.insert(name, value.clone());
                }
                None if template == value => {}
                None => return None,
            }
        }
        Some(params)
    }

    fn from_parts(segments: Vec<String>, rooted: bool) -> Self {
        Self {
            segments,
            rooted,
            rendered: RenderCache::default(),
        }
    }

    fn split_segments(input: &str) -> Vec<String> {
        let keeps_empty_tail = input.ends_with("//");
        let body = if input.ends_with('/') && !keeps_empty_tail {
            &input[..input.len() - 1]
        } else {
            input
        };

        let mut segments: Vec<String> = body.split('/').skip(1).map(str::to_string).collect();
        if keeps_empty_tail {
            segments.pop();
        }
        segments
    }
}

/// Default parameter extractor: `[name]` yields `name`.
#[must_use]
pub fn bracket_parameter(segment: &str) -> Option<String> {
    segment
        .strip_prefix('[')?
        .strip_suffix(']')
        .map(str::to_string)
}

impl Default for Path {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render(f.alternate()))
    }
}

impl FromStr for Path {
    type Err = crate::UrlParseFailureReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(crate::UrlParseFailureReason::InvalidPath)
    }
}

impl TryFrom<&str> for Path {
    type Error = crate::UrlParseFailureReason;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.render(false))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
