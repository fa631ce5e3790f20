//! Network address of a URL endpoint.
//!
//! An address is either an IPv4 value or a sequence of DNS labels. IPv4 is
//! always tried first, so `1.2.3.4` is never read as four DNS labels.

use std::borrow::Cow;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::constants::IPV4_OCTET_COUNT;
use crate::encoding::{label_to_ascii, label_to_unicode};
use crate::render::RenderCache;

/// Discriminant of an [`AddressValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Four decimal octets
    Ipv4,
    /// Dot-separated domain labels
    Dns,
}

/// The host portion of an endpoint.
///
/// # Examples
///
/// ```
/// use typed_url::{AddressKind, AddressValue};
///
/// let ip = AddressValue::parse("192.168.1.1").unwrap();
/// assert_eq!(ip.kind(), AddressKind::Ipv4);
///
/// let dns = AddressValue::parse("example.net").unwrap();
/// assert_eq!(dns.chunks(), vec!["example", "net"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressValue {
    /// An IPv4 address (e.g., `192.168.1.1`)
    Ipv4(Ipv4Addr),
    /// A DNS name (e.g., `example.net`)
    Dns(DnsName),
}

impl AddressValue {
    /// Parses an address, trying IPv4 before DNS.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::parse_ipv4(input).or_else(|| Self::parse_dns(input))
    }

    /// Parses exactly four dot-separated decimal octets in `0..=255`.
    ///
    /// Leading zeros are accepted (`010` is octet 10).
    #[must_use]
    pub fn parse_ipv4(input: &str) -> Option<Self> {
        let chunks: Vec<String> = input.split('.').map(str::to_string).collect();
        Self::octets_from_chunks(&chunks).map(Self::ipv4)
    }

    /// Parses a DNS name; see [`DnsName::parse`].
    #[must_use]
    pub fn parse_dns(input: &str) -> Option<Self> {
        DnsName::parse(input).map(Self::Dns)
    }

    /// Creates an IPv4 address from its octets.
    #[must_use]
    pub const fn ipv4(octets: [u8; 4]) -> Self {
        Self::Ipv4(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
    }

    /// The unspecified IPv4 address `0.0.0.0`.
    #[must_use]
    pub const fn unspecified() -> Self {
        Self::Ipv4(Ipv4Addr::UNSPECIFIED)
    }

    /// The DNS name `example.net`.
    #[must_use]
    pub fn example_net() -> Self {
        Self::Dns(DnsName::example_net())
    }

    /// Returns which variant this address is.
    #[must_use]
    pub const fn kind(&self) -> AddressKind {
        match self {
            Self::Ipv4(_) => AddressKind::Ipv4,
            Self::Dns(_) => AddressKind::Dns,
        }
    }

    /// Returns the IPv4 value, if this is an IPv4 address.
    #[must_use]
    pub const fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            Self::Ipv4(ip) => Some(*ip),
            Self::Dns(_) => None,
        }
    }

    /// Returns the DNS name, if this is a DNS address.
    #[must_use]
    pub const fn as_dns(&self) -> Option<&DnsName> {
        match self {
            Self::Ipv4(_) => None,
            Self::Dns(name) => Some(name),
        }
    }

    /// Returns the address chunks: decimal octets or canonical labels.
    #[must_use]
    pub fn chunks(&self) -> Vec<String> {
        match self {
            Self::Ipv4(ip) => ip.octets().iter().map(u8::to_string).collect(),
            Self::Dns(name) => name.labels().to_vec(),
        }
    }

    /// Returns a new address of the same kind with transformed chunks.
    ///
    /// The chunks are re-validated: IPv4 needs exactly four decimal octets
    /// in `0..=255`, DNS needs a valid label sequence. Returns `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_url::AddressValue;
    ///
    /// let ip = AddressValue::parse("10.0.0.1").unwrap();
    /// let next = ip.with_chunks(|chunks| chunks[3] = "2".to_string()).unwrap();
    /// assert_eq!(next.to_string(), "10.0.0.2");
    ///
    /// assert!(ip.with_chunks(|chunks| chunks[0] = "300".to_string()).is_none());
    /// ```
    #[must_use]
    pub fn with_chunks(&self, transform: impl FnOnce(&mut Vec<String>)) -> Option<Self> {
        let mut chunks = self.chunks();
        transform(&mut chunks);
        match self {
            Self::Ipv4(_) => Self::octets_from_chunks(&chunks).map(Self::ipv4),
            Self::Dns(_) => DnsName::try_new(chunks).map(Self::Dns),
        }
    }

    /// Renders the address; escaped mode transcodes DNS labels to ASCII.
    #[must_use]
    pub fn render(&self, escaped: bool) -> Cow<'_, str> {
        match self {
            Self::Ipv4(ip) => Cow::Owned(ip.to_string()),
            Self::Dns(name) => Cow::Borrowed(name.render(escaped)),
        }
    }

    fn octets_from_chunks(chunks: &[String]) -> Option<[u8; 4]> {
        if chunks.len() != IPV4_OCTET_COUNT {
            return None;
        }
        let mut octets = [0u8; 4];
        for (octet, chunk) in octets.iter_mut().zip(chunks) {
            if chunk.is_empty() || !chunk.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            *octet = chunk.parse().ok()?;
        }
        Some(octets)
    }
}

impl fmt::Display for AddressValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(f.alternate()))
    }
}

impl FromStr for AddressValue {
    type Err = crate::UrlParseFailureReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(crate::UrlParseFailureReason::InvalidEndpoint)
    }
}

impl TryFrom<&str> for AddressValue {
    type Error = crate::UrlParseFailureReason;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Ipv4Addr> for AddressValue {
    fn from(ip: Ipv4Addr) -> Self {
        Self::Ipv4(ip)
    }
}

impl From<DnsName> for AddressValue {
    fn from(name: DnsName) -> Self {
        Self::Dns(name)
    }
}

/// A validated sequence of DNS labels stored in Unicode form.
///
/// Labels given in ASCII-compatible form (`xn--...`) are decoded on
/// construction; escaped rendering encodes them back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsName {
    labels: Vec<String>,
    rendered: RenderCache,
}

impl DnsName {
    /// Parses a dot-separated DNS name.
    ///
    /// A single trailing dot (fully-qualified form) is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_url::DnsName;
    ///
    /// let name = DnsName::parse("xn--mnchen-3ya.de.").unwrap();
    /// assert_eq!(name.labels(), ["münchen", "de"]);
    /// assert_eq!(name.render(true), "xn--mnchen-3ya.de");
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.strip_suffix('.').unwrap_or(input);
        Self::try_new(input.split('.').map(str::to_string).collect())
    }

    /// Creates a DNS name from labels, returning `None` if any label is invalid.
    ///
    /// The sequence must be non-empty, every label non-empty and transcodable,
    /// and the last label must not be purely numeric.
    #[must_use]
    pub fn try_new(labels: Vec<String>) -> Option<Self> {
        if labels.is_empty() {
            return None;
        }

        let mut canonical = Vec::with_capacity(labels.len());
        for label in labels {
            let unicode = label_to_unicode(&label)?.into_owned();
            if unicode.is_empty() || label_to_ascii(&unicode).is_none() {
                return None;
            }
            canonical.push(unicode);
        }

        if canonical
            .last()
            .is_some_and(|tld| tld.bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }

        Some(Self {
            labels: canonical,
            rendered: RenderCache::default(),
        })
    }

    /// Creates a DNS name from already validated labels.
    ///
    /// # Panics
    ///
    /// Panics if the labels do not form a valid DNS name (see [`Self::try_new`]).
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        match Self::try_new(labels) {
            Some(name) => name,
            None => panic!("invalid DNS label sequence"),
        }
    }

    /// The name `example.net`.
    #[must_use]
    pub fn example_net() -> Self {
        Self {
            labels: vec!["example".to_string(), "net".to_string()],
            rendered: RenderCache::default(),
        }
    }

    /// Returns the canonical (Unicode) labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns a new name with transformed labels, or `None` if they are invalid.
    #[must_use]
    pub fn with_labels(&self, transform: impl FnOnce(&mut Vec<String>)) -> Option<Self> {
        let mut labels = self.labels.clone();
        transform(&mut labels);
        Self::try_new(labels)
    }

    /// Renders the name; escaped mode uses ASCII-compatible labels.
    #[must_use]
    pub fn render(&self, escaped: bool) -> &str {
        self.rendered.get_or_render(escaped, || {
            if escaped {
                self.labels
                    .iter()
                    .map(|label| label_to_ascii(label).unwrap_or(Cow::Borrowed(label)))
                    .collect::<Vec<_>>()
                    .join(".")
            } else {
                self.labels.join(".")
            }
        })
    }

    /// Renders the fully-qualified form with a trailing root dot.
    #[must_use]
    pub fn render_fqdn(&self, escaped: bool) -> String {
        format!("{}.", self.render(escaped))
    }
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render(f.alternate()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AddressValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.render(false))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AddressValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
