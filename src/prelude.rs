//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use typed_url::prelude::*;
//!
//! let url = Url::parse("http://example.net/a").unwrap();
//! assert_eq!(url.endpoint(), Some(&Endpoint::example_net()));
//! ```
//!
//! Change records (`UrlChanges`, `EndpointChanges`, `UserInfoChanges`) are
//! left out; import them by name where needed.

pub use crate::{
    // Core types
    AddressKind, AddressValue, DnsName, Endpoint, Path, Query, Url, UserInfo,
    // Configuration
    ParseOptions, QueryParser,
    // Errors
    UrlParseFailureReason,
};
