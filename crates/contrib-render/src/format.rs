//! Labels, titles, tick values, and output file names.

/// Integer percent, e.g. `0.333` → `"33%"`. Never prints `-0%`.
pub fn percent_label(value: f64) -> String {
    let pct = (value * 100.0).round();
    let pct = if pct == 0.0 { 0.0 } else { pct };
    format!("{pct:.0}%")
}

/// First character upper-cased, the rest lower-cased.
pub fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title of the total growth chart, e.g. "Year to year growth (total)".
pub fn growth_title(period: &str) -> String {
    sentence_case(&format!("{period} to {period} growth (total)"))
}

pub const CONTRIBUTION_TITLE: &str = "Contributions to total growth";

/// File name of the total growth chart, e.g. `year_growth.html`.
pub fn growth_file_name(period: &str) -> String {
    format!("{period}_growth.html")
}

/// Evenly spaced tick values covering `[lo, hi]` with a 1/2/5 × 10^k step.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return vec![lo];
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Escape text for inclusion in SVG/HTML.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
