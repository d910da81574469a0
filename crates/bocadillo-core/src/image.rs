//! Embeddable image references and the generated placeholder avatar.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use pulldown_cmark_escape::escape_html;

/// Side length of the generated placeholder avatar, in pixels.
pub const PLACEHOLDER_SIZE: u32 = 120;

/// An image usable directly as an `src` attribute (always a `data:` URL).
///
/// Cheap to clone: a new character shares one reference across all five
/// emotion slots until a slot is replaced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    /// Wrap an already-encoded data URL.
    pub fn from_data_url(url: impl Into<Arc<str>>) -> Self {
        Self(url.into())
    }

    /// Encode raw file contents as a base64 data URL.
    ///
    /// An empty MIME type falls back to `application/octet-stream`, which is
    /// what the browser's own FileReader reports for untyped blobs.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let mime = if mime.trim().is_empty() {
            "application/octet-stream"
        } else {
            mime.trim()
        };
        let payload = STANDARD.encode(bytes);
        Self(format!("data:{mime};base64,{payload}").into())
    }

    /// Generated avatar for characters created without an upload: the
    /// character's color as background and the first letter of its name.
    pub fn placeholder(name: &str, color: &str) -> Self {
        let svg = placeholder_svg(name, color);
        Self(format!("data:image/svg+xml;utf8,{}", encode_uri_component(&svg)).into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type declared by the data URL, if it has one.
    pub fn mime(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let end = rest.find([';', ','])?;
        Some(&rest[..end])
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build the placeholder SVG markup (unencoded).
pub fn placeholder_svg(name: &str, color: &str) -> String {
    let initial = name.trim().chars().next().map(String::from).unwrap_or_default();
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}">"#,
            r#"<rect width="100%" height="100%" fill="{color}"/>"#,
            r#"<text x="50%" y="55%" dominant-baseline="middle" text-anchor="middle" "#,
            r##"font-size="50" fill="#fff">{initial}</text></svg>"##
        ),
        size = PLACEHOLDER_SIZE,
        color = escape_markup(color),
        initial = escape_markup(&initial),
    )
}

fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    if escape_html(&mut out, s).is_err() {
        return String::new();
    }
    out
}

/// Bytes `encodeURIComponent` leaves alone: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string the way JavaScript's `encodeURIComponent` does.
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        insta::assert_snapshot!(encode_uri_component("<a b=\"c\">"), @"%3Ca%20b%3D%22c%22%3E");
        assert_eq!(encode_uri_component("Az09-_.!~*'()"), "Az09-_.!~*'()");
        // Multi-byte characters are encoded per UTF-8 byte.
        assert_eq!(encode_uri_component("ñ"), "%C3%B1");
        assert_eq!(encode_uri_component("#/"), "%23%2F");
    }

    #[test]
    fn test_placeholder_svg() {
        insta::assert_snapshot!(
            placeholder_svg("Ana", "#f3c26b"),
            @r##"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="120"><rect width="100%" height="100%" fill="#f3c26b"/><text x="50%" y="55%" dominant-baseline="middle" text-anchor="middle" font-size="50" fill="#fff">A</text></svg>"##
        );
    }

    #[test]
    fn test_placeholder_escapes_markup() {
        let svg = placeholder_svg("<b>", "red\" onload=\"x");
        assert!(svg.contains(">&lt;</text>"));
        assert!(svg.contains("fill=\"red&quot; onload=&quot;x\""));
    }

    #[test]
    fn test_placeholder_keeps_literal_hash_fill() {
        let svg = placeholder_svg("Beto", "#000");
        assert!(svg.ends_with(r##"font-size="50" fill="#fff">B</text></svg>"##));
        assert!(svg.contains(r##"fill="#000"/>"##));
    }

    #[test]
    fn test_placeholder_uses_first_scalar() {
        let svg = placeholder_svg("Ñoño", "blue");
        assert!(svg.contains(">Ñ</text>"));
    }

    #[test]
    fn test_placeholder_data_url() {
        let img = ImageRef::placeholder("Ana", "#000");
        assert!(img.as_str().starts_with("data:image/svg+xml;utf8,%3Csvg"));
        assert_eq!(img.mime(), Some("image/svg+xml"));
    }

    #[test]
    fn test_from_bytes() {
        let img = ImageRef::from_bytes("image/png", b"hello");
        assert_eq!(img.as_str(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(img.mime(), Some("image/png"));

        let untyped = ImageRef::from_bytes("", &[]);
        assert_eq!(untyped.as_str(), "data:application/octet-stream;base64,");
    }
}
