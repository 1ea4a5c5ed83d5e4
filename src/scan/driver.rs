use crate::catalog::Catalog;
use crate::catalog::selector::StructuralPattern;
use crate::classify::{Verdict, classify_button, classify_image};
use crate::dom::Document;
use crate::ledger::ProcessedLedger;
use crate::rewrite::Rewriter;
use crate::trace::{TraceEvent, TraceLogger};

/// What a sweep covers. The debounced mutation path runs `Patterns` only;
/// the host-specific full-image fallback belongs to scheduled full sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepScope {
    Full,
    Patterns,
}

/// Runs full-document passes: every structural pattern (images first, then
/// buttons), classify each hit, rewrite the accepted ones.
pub struct ScanDriver {
    sweeps_run: u64,
}

impl ScanDriver {
    pub fn new() -> Self {
        ScanDriver { sweeps_run: 0 }
    }

    pub fn sweeps_run(&self) -> u64 {
        self.sweeps_run
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sweep(
        &mut self,
        doc: &Document,
        catalog: &Catalog,
        ledger: &mut ProcessedLedger,
        rewriter: &mut Rewriter,
        min_icon_px: u32,
        scope: SweepScope,
        tracer: &TraceLogger,
    ) {
        self.sweeps_run += 1;
        let sweep = self.sweeps_run;
        tracer.log(&TraceEvent::now(sweep, "sweep_start").with_detail(format!("{:?}", scope)));

        for pattern in &catalog.image_patterns {
            // One bad pattern must not abort the rest of the sweep.
            let parsed = match StructuralPattern::parse(pattern) {
                Ok(p) => p,
                Err(e) => {
                    tracer.log(
                        &TraceEvent::now(sweep, "pattern_skipped").with_detail(e.to_string()),
                    );
                    continue;
                }
            };
            for el in doc.query(&parsed) {
                let verdict = classify_image(&el, catalog, ledger, min_icon_px);
                if verdict == Verdict::AcceptAsImage {
                    rewriter.rewrite(doc, ledger, &el, verdict, catalog, sweep, tracer);
                }
            }
        }

        for pattern in &catalog.button_patterns {
            let parsed = match StructuralPattern::parse(pattern) {
                Ok(p) => p,
                Err(e) => {
                    tracer.log(
                        &TraceEvent::now(sweep, "pattern_skipped").with_detail(e.to_string()),
                    );
                    continue;
                }
            };
            for el in doc.query(&parsed) {
                let verdict = classify_button(&el, catalog, ledger);
                if verdict == Verdict::AcceptAsButton {
                    rewriter.rewrite(doc, ledger, &el, verdict, catalog, sweep, tracer);
                }
            }
        }

        // Some hosts embed product images only reachable by URL shape, not
        // by any selector. Scan every image on the page for those.
        if scope == SweepScope::Full && catalog.is_slow_host(doc.host()) {
            for el in doc.all_images() {
                let src = el.attr("src").unwrap_or_default();
                if !catalog.is_product_host_src(&src) {
                    continue;
                }
                let verdict = classify_image(&el, catalog, ledger, min_icon_px);
                if verdict == Verdict::AcceptAsImage {
                    rewriter.rewrite(doc, ledger, &el, verdict, catalog, sweep, tracer);
                }
            }
        }
    }
}

impl Default for ScanDriver {
    fn default() -> Self {
        Self::new()
    }
}
