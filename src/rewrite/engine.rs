use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::classify::Verdict;
use crate::dom::{ClickBinding, Document, ElementHandle, ElementRole};
use crate::ledger::ProcessedLedger;
use crate::rewrite::assets::{
    BROKE_BUTTON_CLASS, ORIGINAL_SRC_ATTR, ORIGINAL_SRCSET_ATTR, ORIGINAL_TEXT_ATTR,
    ORIGINAL_VALUE_ATTR, SHAME_IMAGES, SHAME_LABEL, SHAMED_IMAGE_CLASS, fallback_placeholder,
};
use crate::trace::{TraceEvent, TraceLogger};

/// Applies the one-shot, irreversible transformation to accepted elements.
/// Holds the process-local RNG; tests inject a seed for reproducible image
/// choice and savings amounts.
pub struct Rewriter {
    rng: StdRng,
    images_rewritten: u64,
    buttons_rewritten: u64,
}

impl Rewriter {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Rewriter {
            rng,
            images_rewritten: 0,
            buttons_rewritten: 0,
        }
    }

    pub fn images_rewritten(&self) -> u64 {
        self.images_rewritten
    }

    pub fn buttons_rewritten(&self) -> u64 {
        self.buttons_rewritten
    }

    /// Simulated savings figure reported to the counter store.
    pub fn estimate_savings(&mut self) -> u64 {
        self.rng.gen_range(20..120)
    }

    /// Transform one accepted element. Re-checks and sets the processed mark
    /// before touching the element, so within one synchronous turn a second
    /// trigger for the same element becomes a no-op. Returns whether a
    /// rewrite happened.
    pub fn rewrite(
        &mut self,
        doc: &Document,
        ledger: &mut ProcessedLedger,
        el: &ElementHandle,
        verdict: Verdict,
        catalog: &Catalog,
        sweep: u64,
        tracer: &TraceLogger,
    ) -> bool {
        if ledger.has(el) {
            return false;
        }

        match verdict {
            Verdict::Reject => false,
            Verdict::AcceptAsImage => {
                ledger.set(el);
                self.rewrite_image(doc, el, catalog);
                self.images_rewritten += 1;
                tracer.log(&TraceEvent::now(sweep, "image_rewritten").with_element(el));
                true
            }
            Verdict::AcceptAsButton => {
                ledger.set(el);
                self.rewrite_button(doc, el);
                self.buttons_rewritten += 1;
                tracer.log(&TraceEvent::now(sweep, "button_rewritten").with_element(el));
                true
            }
        }
    }

    fn rewrite_image(&mut self, doc: &Document, el: &ElementHandle, catalog: &Catalog) {
        // Snapshot originals before anything else
        let original_src = el.attr("src").unwrap_or_default();
        let original_srcset = el.attr("srcset").unwrap_or_default();
        doc.set_attr(el, ORIGINAL_SRC_ATTR, &original_src);
        doc.set_attr(el, ORIGINAL_SRCSET_ATTR, &original_srcset);

        let shame = self.pick_shame_image();
        doc.set_attr(el, "src", shame);
        doc.set_attr(el, "srcset", "");

        // Overwrite every lazy-load staging attribute present, so a later
        // lazy-load trigger can only re-apply the replacement.
        for lazy in &catalog.lazy_attrs {
            if el.has_attr(lazy) {
                doc.set_attr(el, lazy, shame);
            }
        }

        // A `loading` hint could make the page re-fetch the original.
        doc.remove_attr(el, "loading");

        el.add_class(SHAMED_IMAGE_CLASS);
        el.set_style("content", "none !important");

        // If the shame image cannot load, swap in the generated placeholder
        // instead of ever showing the original again.
        el.set_fallback_src(&fallback_placeholder());
    }

    fn rewrite_button(&mut self, doc: &Document, el: &ElementHandle) {
        let text = el.visible_text();
        let value = el.attr("value").unwrap_or_default();
        doc.set_attr(el, ORIGINAL_TEXT_ATTR, if text.is_empty() { &value } else { &text });
        doc.set_attr(el, ORIGINAL_VALUE_ATTR, &value);

        if el.role() == ElementRole::Button && el.tag() == "input" {
            doc.set_attr(el, "value", SHAME_LABEL);
        } else {
            el.replace_text(SHAME_LABEL);
        }

        el.add_class(BROKE_BUTTON_CLASS);

        // Single interception point: the engine dispatches this binding,
        // swallowing the event and opening the interstitial.
        el.bind_click(ClickBinding::Intercept);
    }

    fn pick_shame_image(&mut self) -> &'static str {
        SHAME_IMAGES[self.rng.gen_range(0..SHAME_IMAGES.len())]
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new()
    }
}
