//! Built-in match rules. Pure data: host quirks get new entries here (or via
//! the config file) without touching the classifier or the sweep.

/// Structural patterns for purchase-button candidates. Deliberately broad at
/// the tail (`button`, `input[type=submit]`); the text gate in the
/// classifier narrows them.
pub const BUTTON_PATTERNS: &[&str] = &[
    // Amazon
    "#buy-now-button",
    "#add-to-cart-button",
    "input[name=\"submit.buy-now\"]",
    "[data-action=\"buy-now\"]",
    ".a-button-buybox",
    "#buyNow",
    // Shopee
    ".btn-solid-primary",
    ".shopee-button-solid--primary",
    "button[class*=\"btn-solid-primary\"]",
    "[class*=\"add-to-cart-btn\"]",
    ".cart-drawer__checkout-btn",
    "[data-sqe=\"add-to-cart\"]",
    ".product-briefing button[class*=\"btn\"]",
    ".stardust-button--primary",
    // Generic patterns
    "[class*=\"buy-now\"]",
    "[class*=\"buyNow\"]",
    "[class*=\"add-to-cart\"]",
    "[class*=\"addToCart\"]",
    "[class*=\"add_to_cart\"]",
    "[class*=\"checkout\"]",
    "[class*=\"purchase\"]",
    // Broad, text-gated
    "button",
    "input[type=\"submit\"]",
    "a[class*=\"btn\"]",
    "[role=\"button\"]",
];

/// Structural patterns for product-image candidates.
pub const IMAGE_PATTERNS: &[&str] = &[
    // Amazon
    "#landingImage",
    "#imgBlkFront",
    ".s-image",
    "[data-image-source-density]",
    ".a-dynamic-image",
    // Shopee: aggressive, these lazy-load real dimensions late
    "img[src*=\"down.img.susercontent.com\"]",
    "img[src*=\"cf.shopee\"]",
    "img[src*=\"f.shopee\"]",
    "img[src*=\"shopeemobile\"]",
    "[class*=\"ofs-image\"] img",
    "[class*=\"_2-PfPE\"] img",
    "[class*=\"image-carousel\"] img",
    "[class*=\"product-image\"] img",
    "[class*=\"item-card\"] img",
    // Generic product images
    "[class*=\"product-image\"]",
    "[class*=\"productImage\"]",
    "[class*=\"product_image\"]",
    "[class*=\"item-image\"]",
    "[class*=\"itemImage\"]",
    "img[class*=\"gallery\"]",
    ".product img",
    "[data-testid*=\"product\"] img",
    "[data-testid*=\"image\"]",
    // Common patterns
    "img[src*=\"product\"]",
    "img[src*=\"item\"]",
    "img[alt*=\"product\"]",
];

/// Case-insensitive purchase-intent phrases.
pub const PHRASE_PATTERNS: &[&str] = &[
    r"buy\s*now",
    r"add\s*to\s*cart",
    r"add\s*to\s*bag",
    r"purchase",
    r"checkout",
    r"place\s*order",
    r"complete\s*order",
    r"proceed\s*to",
    r"shop\s*now",
    r"order\s*now",
    r"get\s*it\s*now",
];

/// Source-URL substrings that mark an image as a product image regardless of
/// measured size (these CDNs populate dimensions only after lazy load).
pub const PRODUCT_HOST_MARKERS: &[&str] = &[
    "down.img.susercontent.com",
    "cf.shopee",
    "f.shopee",
    "shopeemobile",
];

/// Hosts that hydrate content well after load; they get delayed re-sweeps
/// and the full-image fallback scan.
pub const SLOW_HOSTS: &[&str] = &["shopee"];

/// Attributes pages use to stage a source URL before populating `src`. Every
/// one present on a rewritten image is overwritten so a later lazy-load
/// trigger cannot restore the original.
pub const LAZY_ATTRS: &[&str] = &[
    "data-src",
    "data-lazy-src",
    "data-original",
    "data-srcset",
    "data-lazy",
];

/// Source-bearing attributes whose mutation triggers immediate single-element
/// reclassification.
pub const WATCHED_ATTRS: &[&str] = &["src", "data-src"];
