use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::dom::ElementHandle;

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub sweep: u64,

    pub action: String,

    pub element: Option<String>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(sweep: u64, action: impl ToString) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            sweep,
            action: action.to_string(),
            element: None,
            detail: None,
        }
    }

    pub fn with_element(mut self, el: &ElementHandle) -> Self {
        self.element = Some(element_fingerprint(el));
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

/// Short stable fingerprint for an element, so trace lines can be correlated
/// without serializing the node itself.
pub fn element_fingerprint(el: &ElementHandle) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(el.tag().as_bytes());
    if let Some(id) = el.id() {
        hasher.update(id.as_bytes());
    }
    if let Some(src) = el.attr("src") {
        hasher.update(src.as_bytes());
    }
    hasher.update(el.visible_text().as_bytes());

    let digest = format!("{:x}", hasher.finalize());
    digest[..12].to_string()
}
