//! Formatting helpers for report lines.

use std::fmt;

/// Join items with a separator.
pub fn format_list<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// `"{label}: l1 l2 ..."`, the shape shared by semantic errors and warnings.
///
/// Lines are printed in the order given; callers sort first.
pub fn line_report(label: &str, lines: &[usize]) -> String {
    let mut out = format!("{}:", label);
    for line in lines {
        out.push(' ');
        out.push_str(&line.to_string());
    }
    out
}

/// Sort a line list ascending and render it, or `None` when empty.
pub fn sorted_line_report(label: &str, lines: &[usize]) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    let mut sorted = lines.to_vec();
    sorted.sort_unstable();
    Some(line_report(label, &sorted))
}
