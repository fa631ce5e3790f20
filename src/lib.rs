//! Strongly-typed, immutable URL values.
//!
//! This crate parses URL strings into a composition of value objects
//! (protocol, user info, endpoint, path, query, fragment), each of which can
//! be parsed on its own and rendered back to its string form. It never
//! performs I/O or DNS resolution.
//!
//! # Overview
//!
//! ```text
//! protocol ( "://" / ":" ) [ user-info "@" ] [ endpoint ] [ path ] [ "?" query ] [ "#" fragment ]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use typed_url::{Url, UrlChanges};
//!
//! let url = Url::parse("https://user@bücher.example:8443/shelf/42?sort=title#top").unwrap();
//!
//! assert_eq!(url.protocol(), "https");
//! assert_eq!(url.user_name(), "user");
//! assert_eq!(url.port(), Some(8443));
//! assert_eq!(url.query().get("sort"), Some("title"));
//!
//! // Escaped rendering transcodes the host and percent-encodes components
//! assert_eq!(
//!     url.render(true),
//!     "https://user@xn--bcher-kva.example:8443/shelf/42?sort=title#top"
//! );
//!
//! // Values are immutable; `with` returns a new URL
//! let other = url.with(UrlChanges::new().fragment("bottom"));
//! assert_eq!(other.fragment(), "bottom");
//! assert_eq!(url.fragment(), "top");
//! ```
//!
//! # Path templates
//!
//! ```rust
//! use typed_url::Path;
//!
//! let template = Path::parse("/users/[id]/posts/[post]").unwrap();
//! let concrete = Path::parse("/users/7/posts/hello").unwrap();
//!
//! let params = template.match_path(&concrete).unwrap();
//! assert_eq!(params["id"], "7");
//! assert_eq!(params["post"], "hello");
//! ```
//!
//! # Rendering
//!
//! Every value implements [`std::fmt::Display`] with its unescaped form;
//! the alternate flag (`{:#}`) selects the escaped form. Renderings are
//! computed once per mode and cached.
//!
//! # Feature flags
//!
//! - `serde`: string-based `Serialize`/`Deserialize` for the value types and
//!   `Deserialize` for [`ParseOptions`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod constants;
mod encoding;
mod endpoint;
mod error;
#[cfg(kani)]
mod kani_impls;
mod path;
pub mod prelude;
mod query;
mod render;
mod url;
mod user_info;

pub use address::{AddressKind, AddressValue, DnsName};
pub use constants::{
    AUTHORITY_POSTFIX, DEFAULT_PROTOCOL, DEFAULT_PROTOCOL_INFO, IPV4_OCTET_COUNT, OPAQUE_POSTFIX,
    PUNYCODE_PREFIX,
};
pub use endpoint::{Endpoint, EndpointChanges};
pub use error::UrlParseFailureReason;
pub use path::{bracket_parameter, Path};
pub use query::{Query, QueryParser};
pub use url::{ParseOptions, Url, UrlChanges, UrlComponents};
pub use user_info::{UserInfo, UserInfoChanges};
