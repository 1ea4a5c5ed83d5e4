use crate::catalog::Catalog;
use crate::dom::{ElementHandle, ElementRole};
use crate::ledger::ProcessedLedger;

/// Below this many logical pixels on both axes an image is treated as an
/// icon, not a product shot.
pub const DEFAULT_MIN_ICON_PX: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Reject,
    AcceptAsImage,
    AcceptAsButton,
}

/// Pure image-candidate check: processed mark, role, host override, then the
/// icon-size heuristic. Unknown dimensions are accepted; for this engine a
/// false positive is cheaper than a missed product image.
pub fn classify_image(
    el: &ElementHandle,
    catalog: &Catalog,
    ledger: &ProcessedLedger,
    min_icon_px: u32,
) -> Verdict {
    if ledger.has(el) {
        return Verdict::Reject;
    }
    if el.role() != ElementRole::Image {
        return Verdict::Reject;
    }

    // Known product CDNs lazy-load real dimensions, so size is meaningless
    // there: accept on the URL alone.
    let src = el.attr("src").unwrap_or_default();
    if catalog.is_product_host_src(&src) {
        return Verdict::AcceptAsImage;
    }

    let (width, height) = effective_size(el);
    if width > 0 && height > 0 && width < min_icon_px && height < min_icon_px {
        return Verdict::Reject;
    }

    Verdict::AcceptAsImage
}

/// Pure button-candidate check. Structural patterns are deliberately broad
/// (any `button` matches), so acceptance hangs entirely on the text gate:
/// visible label or aria-label must match a purchase phrase.
pub fn classify_button(el: &ElementHandle, catalog: &Catalog, ledger: &ProcessedLedger) -> Verdict {
    if ledger.has(el) {
        return Verdict::Reject;
    }
    if el.role() == ElementRole::Image {
        return Verdict::Reject;
    }

    let text = visible_label(el);
    let aria = el.attr("aria-label").unwrap_or_default();

    if catalog.matches_phrase(&text) || catalog.matches_phrase(&aria) {
        Verdict::AcceptAsButton
    } else {
        Verdict::Reject
    }
}

/// Natural dimensions when known, rendered otherwise; zero means unknown.
fn effective_size(el: &ElementHandle) -> (u32, u32) {
    let (nw, nh) = el.natural_size();
    let (rw, rh) = el.rendered_size();
    (
        if nw > 0 { nw } else { rw },
        if nh > 0 { nh } else { rh },
    )
}

/// Inner text for most controls, `value` for input-style ones.
fn visible_label(el: &ElementHandle) -> String {
    let text = el.visible_text();
    if !text.is_empty() {
        return text;
    }
    el.attr("value").unwrap_or_default()
}
