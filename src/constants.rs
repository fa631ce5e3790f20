//! Constants for URL parsing and rendering.

/// Protocol used by [`UrlComponents::default`](crate::UrlComponents).
pub const DEFAULT_PROTOCOL: &str = "http";

/// Number of octets in an IPv4 address.
pub const IPV4_OCTET_COUNT: usize = 4;

/// Separator between a protocol and an authority section.
pub const AUTHORITY_POSTFIX: &str = "://";

/// Separator between a protocol and an opaque remainder.
pub const OPAQUE_POSTFIX: &str = ":";

/// ASCII prefix marking a punycode-encoded DNS label.
pub const PUNYCODE_PREFIX: &str = "xn--";

/// Built-in protocol policy: protocol name and whether it requires `://`.
pub const DEFAULT_PROTOCOL_INFO: [(&str, bool); 4] = [
    ("http", true),
    ("https", true),
    ("tel", false),
    ("file", true),
];
