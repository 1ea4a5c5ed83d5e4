//! Fixed replacement content: shame images, the generated fallback
//! placeholder, labels, marker classes, and snapshot attribute names.

/// Replacement sources, picked pseudo-randomly per rewritten image.
pub const SHAME_IMAGES: &[&str] = &[
    "https://i.imgflip.com/1wz3as.jpg",
    "https://media.giphy.com/media/3o7TKxZzyBk4IlS7Is/giphy.gif",
    "https://media.giphy.com/media/l0HlPtbGpcnqa0fja/giphy.gif",
];

/// Label written onto transformed purchase controls.
pub const SHAME_LABEL: &str = "\u{1f4b8} YOU'RE BROKE \u{1f4b8}";

/// Marker class on rewritten images.
pub const SHAMED_IMAGE_CLASS: &str = "spendguard-shamed";

/// Marker class on rewritten buttons.
pub const BROKE_BUTTON_CLASS: &str = "spendguard-broke-button";

/// Attribute names holding the pre-rewrite snapshot, element-local so a
/// future restore needs nothing but the element itself.
pub const ORIGINAL_SRC_ATTR: &str = "data-original-src";
pub const ORIGINAL_SRCSET_ATTR: &str = "data-original-srcset";
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
pub const ORIGINAL_VALUE_ATTR: &str = "data-original-value";

const FALLBACK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200">
  <rect fill="#1a1a2e" width="200" height="200"/>
  <circle cx="100" cy="80" r="50" fill="#e94560"/>
  <circle cx="80" cy="70" r="8" fill="#1a1a2e"/>
  <circle cx="120" cy="70" r="8" fill="#1a1a2e"/>
  <path d="M 70 100 Q 100 85 130 100" stroke="#1a1a2e" stroke-width="4" fill="none"/>
  <text x="100" y="160" text-anchor="middle" fill="#e94560" font-family="Impact" font-size="16">YOU'RE BROKE</text>
  <text x="100" y="180" text-anchor="middle" fill="#fff" font-family="Arial" font-size="12">- Your Wallet</text>
</svg>"##;

/// Locally generated placeholder shown when a shame image itself fails to
/// load. A data URI so it can never fail the same way.
pub fn fallback_placeholder() -> String {
    format!("data:image/svg+xml,{}", uri_encode(FALLBACK_SVG))
}

/// Minimal percent-encoding for embedding markup in a data URI.
fn uri_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '#' => out.push_str("%23"),
            '"' => out.push_str("%22"),
            '\n' => out.push_str("%0A"),
            ' ' => out.push_str("%20"),
            other => out.push(other),
        }
    }
    out
}
