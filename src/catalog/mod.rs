pub mod patterns;
pub mod selector;

use regex::{Regex, RegexBuilder};

use crate::catalog::patterns::{
    BUTTON_PATTERNS, IMAGE_PATTERNS, LAZY_ATTRS, PHRASE_PATTERNS, PRODUCT_HOST_MARKERS,
    SLOW_HOSTS, WATCHED_ATTRS,
};
use crate::error::EngineError;

/// The full rule set the classifier and sweep read. Immutable after startup;
/// built from the built-in tables plus any config-supplied extensions.
pub struct Catalog {
    pub image_patterns: Vec<String>,
    pub button_patterns: Vec<String>,
    pub phrase_patterns: Vec<Regex>,
    pub product_host_markers: Vec<String>,
    pub slow_hosts: Vec<String>,
    pub lazy_attrs: Vec<String>,
    pub watched_attrs: Vec<String>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let phrase_patterns = PHRASE_PATTERNS
            .iter()
            .filter_map(|p| compile_phrase(p).ok())
            .collect();

        Catalog {
            image_patterns: to_strings(IMAGE_PATTERNS),
            button_patterns: to_strings(BUTTON_PATTERNS),
            phrase_patterns,
            product_host_markers: to_strings(PRODUCT_HOST_MARKERS),
            slow_hosts: to_strings(SLOW_HOSTS),
            lazy_attrs: to_strings(LAZY_ATTRS),
            watched_attrs: to_strings(WATCHED_ATTRS),
        }
    }

    /// Add host-specific extensions on top of the built-ins. A phrase that
    /// fails to compile is skipped with a warning rather than rejecting the
    /// whole config.
    pub fn extend(
        &mut self,
        image_patterns: &[String],
        button_patterns: &[String],
        phrases: &[String],
        host_markers: &[String],
        slow_hosts: &[String],
    ) {
        self.image_patterns.extend(image_patterns.iter().cloned());
        self.button_patterns.extend(button_patterns.iter().cloned());
        for phrase in phrases {
            match compile_phrase(phrase) {
                Ok(re) => self.phrase_patterns.push(re),
                Err(e) => eprintln!("Warning: skipping phrase pattern: {}", e),
            }
        }
        self.product_host_markers.extend(host_markers.iter().cloned());
        self.slow_hosts.extend(slow_hosts.iter().cloned());
    }

    /// Does any purchase phrase match this text?
    pub fn matches_phrase(&self, text: &str) -> bool {
        !text.is_empty() && self.phrase_patterns.iter().any(|re| re.is_match(text))
    }

    /// Is this source URL on an always-treat-as-product-image host?
    pub fn is_product_host_src(&self, src: &str) -> bool {
        !src.is_empty()
            && self
                .product_host_markers
                .iter()
                .any(|marker| src.contains(marker.as_str()))
    }

    /// Does the page host hydrate slowly (delayed re-sweeps + image fallback
    /// scan)?
    pub fn is_slow_host(&self, host: &str) -> bool {
        self.slow_hosts.iter().any(|h| host.contains(h.as_str()))
    }

    pub fn is_watched_attr(&self, attr: &str) -> bool {
        self.watched_attrs.iter().any(|a| a == attr)
    }
}

/// Compile one purchase phrase as a case-insensitive regex.
pub fn compile_phrase(pattern: &str) -> Result<Regex, EngineError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| EngineError::PhraseParse {
            pattern: pattern.to_string(),
            source,
        })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
