use crate::catalog::Catalog;
use crate::classify::{DEFAULT_MIN_ICON_PX, Verdict, classify_image};
use crate::dom::{ClickBinding, Document, ElementHandle, ElementRole, MutationRecord};
use crate::host::{CounterStore, HostBridge, NullHost, SAVINGS_COUNTER, VISIT_COUNTER};
use crate::ledger::ProcessedLedger;
use crate::overlay::{add_banner, dismiss_interstitial, show_interstitial};
use crate::rewrite::Rewriter;
use crate::runtime::scheduler::{Scheduler, TimerKind};
use crate::scan::{ScanDriver, SweepScope};
use crate::trace::{TraceEvent, TraceLogger};
use crate::watch::{DEFAULT_DEBOUNCE_MS, MutationWatcher};

/// Delays for the extra full sweeps on slow-hydrating hosts.
const SLOW_HOST_RESWEEP_MS: [u64; 3] = [1000, 2000, 3000];

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub debounce_ms: u64,
    pub min_icon_px: u32,
    /// Seed for the rewrite RNG; `None` uses entropy.
    pub seed: Option<u64>,
    /// JSONL trace output path; `None` disables tracing.
    pub trace_path: Option<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_icon_px: DEFAULT_MIN_ICON_PX,
            seed: None,
            trace_path: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No binding of ours; the page's own behavior proceeds.
    Default,
    /// Default action and propagation suppressed.
    Intercepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    pub sweeps: u64,
    pub images_rewritten: u64,
    pub buttons_rewritten: u64,
    pub interstitials_shown: u64,
}

/// The single-threaded, event-driven core. Every entry point (document ready,
/// a mutation notification, timer expiry) runs to completion before the next,
/// so the rewrite path's check-and-set needs no locking.
pub struct PageEngine {
    document: Document,
    catalog: Catalog,
    ledger: ProcessedLedger,
    rewriter: Rewriter,
    driver: ScanDriver,
    watcher: MutationWatcher,
    scheduler: Scheduler,
    host: Box<dyn HostBridge>,
    counters: Box<dyn CounterStore>,
    tracer: TraceLogger,
    min_icon_px: u32,
    interstitials_shown: u64,
}

impl PageEngine {
    pub fn new(
        document: Document,
        catalog: Catalog,
        options: EngineOptions,
        host: Box<dyn HostBridge>,
        counters: Box<dyn CounterStore>,
    ) -> Self {
        let rewriter = match options.seed {
            Some(seed) => Rewriter::with_seed(seed),
            None => Rewriter::new(),
        };
        let tracer = match &options.trace_path {
            Some(path) => TraceLogger::new(path),
            None => TraceLogger::disabled(),
        };

        PageEngine {
            document,
            catalog,
            ledger: ProcessedLedger::new(),
            rewriter,
            driver: ScanDriver::new(),
            watcher: MutationWatcher::new(options.debounce_ms),
            scheduler: Scheduler::new(),
            host,
            counters,
            tracer,
            min_icon_px: options.min_icon_px,
            interstitials_shown: 0,
        }
    }

    /// Built-in catalog, default options, no host side effects.
    pub fn with_defaults(document: Document) -> Self {
        Self::new(
            document,
            Catalog::builtin(),
            EngineOptions::default(),
            Box::new(NullHost),
            Box::new(NullHost),
        )
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            sweeps: self.driver.sweeps_run(),
            images_rewritten: self.rewriter.images_rewritten(),
            buttons_rewritten: self.rewriter.buttons_rewritten(),
            interstitials_shown: self.interstitials_shown,
        }
    }

    /// Document-ready: report the visit, place the banner, run the initial
    /// full sweep, and schedule delayed re-sweeps for slow hosts. Mutation
    /// observation starts after the initial pass, so the engine's own setup
    /// writes don't feed back into it.
    pub fn document_ready(&mut self) {
        self.counters.increment(VISIT_COUNTER, 1);
        let savings = self.rewriter.estimate_savings();
        self.counters.increment(SAVINGS_COUNTER, savings);

        add_banner(&self.document);
        self.sweep(SweepScope::Full);

        if self.catalog.is_slow_host(self.document.host()) {
            for delay in SLOW_HOST_RESWEEP_MS {
                self.scheduler.schedule(delay, TimerKind::DelayedSweep);
            }
        }

        // Observation starts here.
        let _ = self.document.take_mutations();
    }

    /// Drain the mutation journal: node additions arm the debounce, watched
    /// attribute changes on images reclassify that element immediately.
    /// Loops until quiet, since a rewrite journals its own writes; the
    /// processed mark guarantees termination.
    pub fn pump(&mut self) {
        loop {
            let records = self.document.take_mutations();
            if records.is_empty() {
                break;
            }
            for record in records {
                match record {
                    MutationRecord::NodesAdded { .. } => {
                        self.watcher.nodes_added(&mut self.scheduler);
                    }
                    MutationRecord::AttributeChanged { target, attr } => {
                        if !self.catalog.is_watched_attr(&attr) {
                            continue;
                        }
                        let Some(el) = target.upgrade() else { continue };
                        if el.role() != ElementRole::Image {
                            continue;
                        }
                        let verdict =
                            classify_image(&el, &self.catalog, &self.ledger, self.min_icon_px);
                        if verdict == Verdict::AcceptAsImage {
                            self.rewriter.rewrite(
                                &self.document,
                                &mut self.ledger,
                                &el,
                                verdict,
                                &self.catalog,
                                self.driver.sweeps_run(),
                                &self.tracer,
                            );
                        }
                    }
                }
            }
        }
    }

    /// Move the virtual clock forward, firing due timers in deadline order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.scheduler.now_ms() + ms;
        while let Some(kind) = self.scheduler.pop_due(target) {
            match kind {
                TimerKind::DebouncedSweep => {
                    self.watcher.debounce_fired();
                    self.sweep(SweepScope::Patterns);
                }
                TimerKind::DelayedSweep => {
                    self.sweep(SweepScope::Full);
                }
            }
            self.pump();
        }
        self.scheduler.advance_to(target);
    }

    /// The single click interception point for everything this engine has
    /// bound: shame buttons open the interstitial, its controls confirm or
    /// dismiss. Unbound elements keep their page behavior.
    pub fn dispatch_click(&mut self, el: &ElementHandle) -> ClickOutcome {
        match el.click_binding() {
            Some(ClickBinding::Intercept) => {
                self.interstitials_shown += 1;
                self.tracer.log(
                    &TraceEvent::now(self.driver.sweeps_run(), "interstitial_open")
                        .with_element(el),
                );
                show_interstitial(&self.document);
                self.pump();
                ClickOutcome::Intercepted
            }
            Some(ClickBinding::ConfirmClose) => {
                self.tracer
                    .log(&TraceEvent::now(self.driver.sweeps_run(), "close_requested"));
                self.host.close_view();
                ClickOutcome::Intercepted
            }
            Some(ClickBinding::DismissOverlay) => {
                dismiss_interstitial(&self.document);
                self.pump();
                ClickOutcome::Intercepted
            }
            None => ClickOutcome::Default,
        }
    }

    fn sweep(&mut self, scope: SweepScope) {
        self.driver.sweep(
            &self.document,
            &self.catalog,
            &mut self.ledger,
            &mut self.rewriter,
            self.min_icon_px,
            scope,
            &self.tracer,
        );
    }
}
