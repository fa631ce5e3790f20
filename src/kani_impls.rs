//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! This module provides `kani::Arbitrary` trait implementations for the
//! crate's component types, enabling property-based verification with the
//! Kani model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{AddressValue, DnsName, Endpoint, Path};

/// Characters for DNS labels and path segments; letters first so a
/// label can be forced non-numeric.
const LABEL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

/// Number of leading letters in `LABEL_CHARS`
const LETTER_COUNT: usize = 26;

fn arbitrary_label_char() -> char {
    let idx: usize = kani::any();
    LABEL_CHARS[idx % LABEL_CHARS.len()] as char
}

fn arbitrary_letter() -> char {
    let idx: usize = kani::any();
    LABEL_CHARS[idx % LETTER_COUNT] as char
}

/// Generate a 1-4 char ASCII label ending in a letter
fn arbitrary_label() -> String {
    let len: usize = kani::any();
    let len = len % 4;
    let mut label: String = (0..len).map(|_| arbitrary_label_char()).collect();
    label.push(arbitrary_letter());
    label
}

impl kani::Arbitrary for DnsName {
    fn any() -> Self {
        // 1-2 labels for tractability
        let two_labels: bool = kani::any();
        let mut labels = vec![arbitrary_label()];
        if two_labels {
            labels.push(arbitrary_label());
        }
        DnsName::new(labels)
    }
}

impl kani::Arbitrary for AddressValue {
    fn any() -> Self {
        if kani::any() {
            AddressValue::ipv4(kani::any())
        } else {
            AddressValue::Dns(kani::any())
        }
    }
}

impl kani::Arbitrary for Endpoint {
    fn any() -> Self {
        let port: u16 = kani::any();
        Endpoint::new(kani::any(), u32::from(port))
    }
}

impl kani::Arbitrary for Path {
    fn any() -> Self {
        // 0-3 segments for tractability
        let count: usize = kani::any();
        let count = count % 4;
        Path::new((0..count).map(|_| arbitrary_label()))
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Any four octets render as an IPv4 address that parses back
#[kani::proof]
#[kani::unwind(20)]
fn proof_ipv4_render_parse_roundtrip() {
    let octets: [u8; 4] = kani::any();
    let address = AddressValue::ipv4(octets);
    let reparsed = AddressValue::parse(&address.render(false)).expect("rendered IPv4 parses");
    assert_eq!(reparsed, address);
}

/// Proof: Port 0 is never rendered; any other port is
#[kani::proof]
#[kani::unwind(20)]
fn proof_port_sentinel_rendering() {
    let endpoint: Endpoint = kani::any();
    let rendered = endpoint.render(false);
    if endpoint.has_port() {
        assert!(rendered.ends_with(&format!(":{}", endpoint.port())));
    } else {
        assert_eq!(rendered, endpoint.address().render(false));
    }
}

/// Proof: Rendered endpoints parse back to the same value
#[kani::proof]
#[kani::unwind(20)]
fn proof_endpoint_roundtrip() {
    let endpoint: Endpoint = kani::any();
    let reparsed = Endpoint::parse(endpoint.render(false)).expect("rendered endpoint parses");
    assert_eq!(reparsed, endpoint);
}

/// Proof: A path matches itself with no parameters
#[kani::proof]
#[kani::unwind(8)]
fn proof_path_self_match() {
    let path: Path = kani::any();
    let params = path.match_path(&path).expect("self-match succeeds");
    assert!(params.is_empty());
}

/// Proof: A path always starts_with and ends_with itself (reflexive property)
#[kani::proof]
#[kani::unwind(8)]
fn proof_prefix_suffix_reflexive() {
    let path: Path = kani::any();
    assert!(path.starts_with(&path));
    assert!(path.ends_with(&path));
}

/// Proof: If a.starts_with(b) and b.starts_with(c) then a.starts_with(c) (transitive)
#[kani::proof]
#[kani::unwind(8)]
fn proof_starts_with_transitive() {
    let a: Path = kani::any();
    let b: Path = kani::any();
    let c: Path = kani::any();

    kani::assume(a.starts_with(&b));
    kani::assume(b.starts_with(&c));

    assert!(a.starts_with(&c));
}
