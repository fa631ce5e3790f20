//! Text transforms used by escaped rendering: percent-encoding and
//! per-label IDN transcoding.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::constants::PUNYCODE_PREFIX;

/// Everything except ASCII alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single URL component.
pub(crate) fn encode_component(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, COMPONENT).into()
}

/// Percent-decodes a single URL component, replacing invalid UTF-8.
pub(crate) fn decode_component(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}

/// Converts a DNS label to its Unicode form.
///
/// Labels carrying the `xn--` prefix are punycode-decoded; all other labels
/// are returned unchanged. Returns `None` if the punycode payload is invalid.
pub(crate) fn label_to_unicode(label: &str) -> Option<Cow<'_, str>> {
    match strip_punycode_prefix(label) {
        Some(encoded) => idna::punycode::decode_to_string(encoded).map(Cow::Owned),
        None => Some(Cow::Borrowed(label)),
    }
}

/// Converts a DNS label to its ASCII-compatible form.
///
/// ASCII labels are returned unchanged; others are punycode-encoded and
/// prefixed with `xn--`.
pub(crate) fn label_to_ascii(label: &str) -> Option<Cow<'_, str>> {
    if label.is_ascii() {
        return Some(Cow::Borrowed(label));
    }
    idna::punycode::encode_str(label).map(|encoded| Cow::Owned(format!("{PUNYCODE_PREFIX}{encoded}")))
}

fn strip_punycode_prefix(label: &str) -> Option<&str> {
    let prefix_len = PUNYCODE_PREFIX.len();
    if label.len() >= prefix_len
        && label.is_char_boundary(prefix_len)
        && label[..prefix_len].eq_ignore_ascii_case(PUNYCODE_PREFIX)
    {
        Some(&label[prefix_len..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode_component("a b/c?d"), "a%20b%2Fc%3Fd");
        assert_eq!(encode_component("x@y:z"), "x%40y%3Az");
    }

    #[test]
    fn keeps_unreserved_characters() {
        assert_eq!(encode_component("Az09-_.!~*'()"), "Az09-_.!~*'()");
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn decodes_percent_sequences() {
        assert_eq!(decode_component("a%20b"), "a b");
        assert_eq!(decode_component("%C3%A9"), "é");
        assert_eq!(decode_component("plain"), "plain");
    }

    #[test]
    fn punycode_label_decodes() {
        assert_eq!(label_to_unicode("xn--mnchen-3ya").as_deref(), Some("münchen"));
        assert_eq!(label_to_unicode("XN--mnchen-3ya").as_deref(), Some("münchen"));
        assert_eq!(label_to_unicode("example").as_deref(), Some("example"));
    }

    #[test]
    fn unicode_label_encodes() {
        assert_eq!(label_to_ascii("münchen").as_deref(), Some("xn--mnchen-3ya"));
        assert_eq!(label_to_ascii("example").as_deref(), Some("example"));
    }
}
