use crate::runtime::EngineStats;

// ============================================================================
// Console reporter: formatted terminal output for the harness
// ============================================================================

/// Format an engine run for terminal output.
///
/// Produces output like:
/// ```text
/// === spendguard run: shopee.sg ===
///
///   sweeps run:          4
///   images rewritten:    7
///   buttons rewritten:   2
///   interstitials shown: 1
///   close requests:      1
///
/// === 9 elements transformed ===
/// ```
pub fn format_console_report(host: &str, stats: &EngineStats, close_requests: u32) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== spendguard run: {} ===\n\n", host));

    out.push_str(&format!("  sweeps run:          {}\n", stats.sweeps));
    out.push_str(&format!(
        "  images rewritten:    {}\n",
        stats.images_rewritten
    ));
    out.push_str(&format!(
        "  buttons rewritten:   {}\n",
        stats.buttons_rewritten
    ));
    out.push_str(&format!(
        "  interstitials shown: {}\n",
        stats.interstitials_shown
    ));
    out.push_str(&format!("  close requests:      {}\n", close_requests));

    out.push_str(&format!(
        "\n=== {} elements transformed ===\n",
        stats.images_rewritten + stats.buttons_rewritten
    ));

    out
}
