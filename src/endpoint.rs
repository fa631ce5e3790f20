//! Endpoint type: an address with an optional port.
//!
//! ```text
//! endpoint = address [ ":" port ]
//! port     = *DIGIT
//! ```
//!
//! IPv6 literals are not part of this grammar; at most one `:` is accepted.

use std::fmt;
use std::str::FromStr;

use crate::address::AddressValue;
use crate::render::RenderCache;

/// The host and port of a URL authority.
///
/// Port `0` means no port was given and is omitted when rendering.
///
/// # Examples
///
/// ```
/// use typed_url::Endpoint;
///
/// let endpoint = Endpoint::parse("example.net").unwrap();
/// assert_eq!(endpoint.port(), 0);
/// assert_eq!(endpoint.to_string(), "example.net");
///
/// let endpoint = Endpoint::parse("example.net:8080").unwrap();
/// assert_eq!(endpoint.port(), 8080);
/// assert_eq!(endpoint.to_string(), "example.net:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    address: AddressValue,
    port: u32,
    rendered: RenderCache,
}

/// Partial update for [`Endpoint::with`]; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointChanges {
    /// Replacement address
    pub address: Option<AddressValue>,
    /// Replacement port (`0` removes an explicit port)
    pub port: Option<u32>,
}

impl Endpoint {
    /// Creates an endpoint; pass port `0` for "no explicit port".
    #[must_use]
    pub fn new(address: AddressValue, port: u32) -> Self {
        Self {
            address,
            port,
            rendered: RenderCache::default(),
        }
    }

    /// The endpoint `example.net` without a port.
    #[must_use]
    pub fn example_net() -> Self {
        Self::new(AddressValue::example_net(), 0)
    }

    /// Parses `address[:port]`.
    ///
    /// Fails on more than one `:`, an invalid address, or a port that is not
    /// a decimal number fitting in `u32`. An empty port (`host:`) is port `0`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split(':');
        let address_str = parts.next()?;
        let port_str = parts.next();
        if parts.next().is_some() {
            return None;
        }

        let address = AddressValue::parse(address_str)?;
        let port = match port_str {
            None | Some("") => 0,
            Some(port) => Self::parse_port(port)?,
        };

        Some(Self::new(address, port))
    }

    /// Returns the address.
    #[must_use]
    pub const fn address(&self) -> &AddressValue {
        &self.address
    }

    /// Returns the port, `0` if none was given.
    #[must_use]
    pub const fn port(&self) -> u32 {
        self.port
    }

    /// Returns true if an explicit port is set.
    #[must_use]
    pub const fn has_port(&self) -> bool {
        self.port != 0
    }

    /// Renders `address[:port]`, omitting port `0`.
    #[must_use]
    pub fn render(&self, escaped: bool) -> &str {
        self.rendered.get_or_render(escaped, || {
            let address = self.address.render(escaped);
            if self.port == 0 {
                address.into_owned()
            } else {
                format!("{address}:{}", self.port)
            }
        })
    }

    /// Returns a new endpoint with the given changes applied.
    #[must_use]
    pub fn with(&self, changes: EndpointChanges) -> Self {
        Self::new(
            changes.address.unwrap_or_else(|| self.address.clone()),
            changes.port.unwrap_or(self.port),
        )
    }

    /// Returns a new endpoint with the given address.
    #[must_use]
    pub fn with_address(&self, address: AddressValue) -> Self {
        Self::new(address, self.port)
    }

    /// Returns a new endpoint with the given port.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_url::Endpoint;
    ///
    /// let endpoint = Endpoint::example_net().with_port(8472);
    /// assert_eq!(endpoint.to_string(), "example.net:8472");
    /// ```
    #[must_use]
    pub fn with_port(&self, port: u32) -> Self {
        Self::new(self.address.clone(), port)
    }

    /// Returns a new endpoint without an explicit port.
    #[must_use]
    pub fn without_port(&self) -> Self {
        self.with_port(0)
    }

    fn parse_port(input: &str) -> Option<u32> {
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        input.parse().ok()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render(f.alternate()))
    }
}

impl FromStr for Endpoint {
    type Err = crate::UrlParseFailureReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(crate::UrlParseFailureReason::InvalidEndpoint)
    }
}

impl TryFrom<&str> for Endpoint {
    type Error = crate::UrlParseFailureReason;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.render(false))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Endpoint {
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
    use crate::address::AddressKind;

    #[test]
    fn parse_without_port() {
        let endpoint = Endpoint::parse("example.net").unwrap();
        assert_eq!(endpoint.address(), &AddressValue::example_net());
        assert_eq!(endpoint.port(), 0);
        assert!(!endpoint.has_port());
        assert_eq!(endpoint.to_string(), "example.net");
    }

    #[test]
    fn parse_with_port() {
        let endpoint = Endpoint::parse("example.net:8080").unwrap();
        assert_eq!(endpoint.port(), 8080);
        assert_eq!(endpoint.to_string(), "example.net:8080");
    }

    #[test]
    fn parse_ipv4_with_port() {
        let endpoint = Endpoint::parse("127.0.0.1:8472").unwrap();
        assert_eq!(endpoint.address().kind(), AddressKind::Ipv4);
        assert_eq!(endpoint.port(), 8472);
    }

    #[test]
    fn empty_port_is_sentinel() {
        let endpoint = Endpoint::parse("example.net:").unwrap();
        assert_eq!(endpoint.port(), 0);
        assert_eq!(endpoint.to_string(), "example.net");
    }

    #[test]
    fn explicit_zero_port_is_omitted() {
        let endpoint = Endpoint::parse("example.net:0").unwrap();
        assert_eq!(endpoint.to_string(), "example.net");
    }

    #[test]
    fn multiple_colons_fail() {
        assert!(Endpoint::parse("example.net:80:81").is_none());
        assert!(Endpoint::parse("::1").is_none());
    }

    #[test]
    fn invalid_port_fails() {
        assert!(Endpoint::parse("example.net:-1").is_none());
        assert!(Endpoint::parse("example.net:http").is_none());
        assert!(Endpoint::parse("example.net:99999999999").is_none());
    }

    #[test]
    fn invalid_address_fails() {
        assert!(Endpoint::parse("exa..mple:80").is_none());
        assert!(Endpoint::parse(":80").is_none());
    }

    #[test]
    fn escaped_render_uses_ascii_labels() {
        let endpoint = Endpoint::parse("bücher.example:443").unwrap();
        assert_eq!(endpoint.render(false), "bücher.example:443");
        assert_eq!(endpoint.render(true), "xn--bcher-kva.example:443");
    }

    #[test]
    fn with_keeps_unchanged_fields() {
        let endpoint = Endpoint::parse("example.net:8080").unwrap();
        let moved = endpoint.with(EndpointChanges {
            address: Some(AddressValue::ipv4([10, 0, 0, 1])),
            port: None,
        });
        assert_eq!(moved.to_string(), "10.0.0.1:8080");

        let unchanged = endpoint.with(EndpointChanges::default());
        assert_eq!(unchanged, endpoint);
        assert_eq!(endpoint.without_port().to_string(), "example.net");
    }
}
