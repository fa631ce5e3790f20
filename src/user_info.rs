//! User info type: the `name[:password]` part before `@`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::encoding::encode_component;
use crate::render::RenderCache;

/// A user name and password pair.
///
/// An empty name together with an empty password means "no user info".
///
/// # Examples
///
/// ```
/// use typed_url::UserInfo;
///
/// let info = UserInfo::parse("user:pass").unwrap();
/// assert_eq!(info.name(), "user");
/// assert_eq!(info.password(), "pass");
/// assert_eq!(info.render_with_separator(false, true), "user:pass@");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserInfo {
    name: String,
    password: String,
    rendered: RenderCache,
}

/// Partial update for [`UserInfo::with`]; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfoChanges {
    /// Replacement name
    pub name: Option<String>,
    /// Replacement password
    pub password: Option<String>,
}

impl UserInfo {
    /// Creates user info from a name and password.
    #[must_use]
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            rendered: RenderCache::default(),
        }
    }

    /// Creates empty user info.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses `name[:password]`, splitting on the first `:`.
    ///
    /// A single trailing `@` is stripped. Every input is accepted.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.strip_suffix('@').unwrap_or(input);
        let (name, password) = input.split_once(':').unwrap_or((input, ""));
        Some(Self::new(name, password))
    }

    /// Returns the user name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the password, empty if none was given.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns true if both name and password are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.password.is_empty()
    }

    /// Renders `name[:password]`; escaped mode percent-encodes each part.
    #[must_use]
    pub fn render(&self, escaped: bool) -> &str {
        self.rendered.get_or_render(escaped, || {
            let (name, password) = if escaped {
                (encode_component(&self.name), encode_component(&self.password))
            } else {
                (Cow::Borrowed(self.name.as_str()), Cow::Borrowed(self.password.as_str()))
            };
            if password.is_empty() {
                name.into_owned()
            } else {
                format!("{name}:{password}")
            }
        })
    }

    /// Renders like [`Self::render`], appending `@` when requested and the
    /// output is non-empty.
    #[must_use]
    pub fn render_with_separator(&self, escaped: bool, append_separator: bool) -> Cow<'_, str> {
        let output = self.render(escaped);
        if append_separator && !output.is_empty() {
            Cow::Owned(format!("{output}@"))
        } else {
            Cow::Borrowed(output)
        }
    }

    /// Returns new user info with the given changes applied.
    #[must_use]
    pub fn with(&self, changes: UserInfoChanges) -> Self {
        Self::new(
            changes.name.unwrap_or_else(|| self.name.clone()),
            changes.password.unwrap_or_else(|| self.password.clone()),
        )
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render(f.alternate()))
    }
}

impl FromStr for UserInfo {
    type Err = crate::UrlParseFailureReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(crate::UrlParseFailureReason::InvalidUserInfo)
    }
}

impl TryFrom<&str> for UserInfo {
    type Error = crate::UrlParseFailureReason;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UserInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.render(false))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UserInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_only() {
        let info = UserInfo::parse("user").unwrap();
        assert_eq!(info.name(), "user");
        assert_eq!(info.password(), "");
        assert_eq!(info.to_string(), "user");
    }

    #[test]
    fn parse_splits_on_first_colon() {
        let info = UserInfo::parse("user:pa:ss").unwrap();
        assert_eq!(info.name(), "user");
        assert_eq!(info.password(), "pa:ss");
    }

    #[test]
    fn parse_strips_trailing_at() {
        let info = UserInfo::parse("user:pass@").unwrap();
        assert_eq!(info.password(), "pass");
    }

    #[test]
    fn empty_user_info() {
        let info = UserInfo::parse("").unwrap();
        assert!(info.is_empty());
        assert_eq!(info, UserInfo::empty());
        assert_eq!(info.render_with_separator(false, true), "");
    }

    #[test]
    fn password_only_is_not_empty() {
        let info = UserInfo::parse(":secret").unwrap();
        assert!(!info.is_empty());
        assert_eq!(info.render_with_separator(false, true), ":secret@");
    }

    #[test]
    fn escaped_render_encodes_each_part() {
        let info = UserInfo::new("jo hn", "p@ss:word");
        assert_eq!(info.render(true), "jo%20hn:p%40ss%3Aword");
        assert_eq!(info.render(false), "jo hn:p@ss:word");
        assert_eq!(format!("{info:#}"), "jo%20hn:p%40ss%3Aword");
    }

    #[test]
    fn with_keeps_unchanged_fields() {
        let info = UserInfo::new("user", "pass");
        let changed = info.with(UserInfoChanges {
            password: Some(String::new()),
            ..UserInfoChanges::default()
        });
        assert_eq!(changed.to_string(), "user");
        assert_eq!(info.with(UserInfoChanges::default()), info);
    }
}
