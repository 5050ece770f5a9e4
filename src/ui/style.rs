use console::style;
use std::fmt::Display;

/// Green bold - checkmarks, saved confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold - section headers, result titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim - question numbers, footnotes, decorative rules
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow - warnings, incomplete-quiz hints
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green - recorded answers, paths
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold - type code, axis letters
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan underlined - share link, QR address
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}

/// Horizontal meter: `filled` cells of `█`, the rest `░`, clamped to `width`.
pub fn meter(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    format!(
        "{}{}",
        style("█".repeat(filled)).cyan(),
        style("░".repeat(width - filled)).dim()
    )
}
