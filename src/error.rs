//! Error types for URL parsing.

use std::fmt;

/// Why [`Url::parse`](crate::Url::parse) rejected its input.
///
/// Parsing stops at the first failing step, so exactly one reason is
/// reported per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlParseFailureReason {
    /// The input does not have the structure `protocol:[//][user@][host][/path][?query][#fragment]`
    InvalidUrl,
    /// The protocol is not a letter followed by letters, digits, `+`, `.` or `-`
    InvalidProtocol,
    /// The protocol's authority policy disagrees with the `:` / `://` separator used
    NotSupportedProtocol,
    /// The user info section could not be parsed
    InvalidUserInfo,
    /// The host or port could not be parsed
    InvalidEndpoint,
    /// User info or an endpoint was given for a protocol without an authority section
    UnexpectedAuthority,
    /// The path could not be parsed
    InvalidPath,
    /// The query parser rejected the query string
    InvalidQuery,
}

impl UrlParseFailureReason {
    /// Returns the kebab-case tag of this reason, e.g. `invalid-endpoint`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidUrl => "invalid-url",
            Self::InvalidProtocol => "invalid-protocol",
            Self::NotSupportedProtocol => "not-supported-protocol",
            Self::InvalidUserInfo => "invalid-user-info",
            Self::InvalidEndpoint => "invalid-endpoint",
            Self::UnexpectedAuthority => "unexpected-authority",
            Self::InvalidPath => "invalid-path",
            Self::InvalidQuery => "invalid-query",
        }
    }
}

impl fmt::Display for UrlParseFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::error::Error for UrlParseFailureReason {}
