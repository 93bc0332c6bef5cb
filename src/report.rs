//! Reporting over a finished entry map
//!
//! Trivial formatting on top of the extractor's output: a one-line summary
//! and a bounded sample listing. Both borrow the map and never mutate it.

use crate::extract::EntryMap;

/// One-line summary: entry count, total form count, and the longest form
/// name by character length. Ties on length keep the first name seen.
pub fn summarize(entries: &EntryMap) -> String {
    let total_forms: usize = entries.values().map(|forms| forms.len()).sum();

    let mut longest = "";
    let mut longest_len = 0;
    for forms in entries.values() {
        for form in forms {
            let len = form.name().chars().count();
            if len > longest_len {
                longest_len = len;
                longest = form.name();
            }
        }
    }

    format!(
        "entries: {}, total forms: {}, longest name: {:?}",
        entries.len(),
        total_forms,
        longest
    )
}

/// The first `n` entries in numeric identifier order, each rendered as
/// `id: code:name, code:name, ...`. `n == 0` yields no lines.
pub fn sample_lines(entries: &EntryMap, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let mut pairs: Vec<_> = entries.iter().collect();
    // Digit-only identifiers compare numerically as (length, lexicographic),
    // with no width limit.
    pairs.sort_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    pairs
        .into_iter()
        .take(n)
        .map(|(id, forms)| {
            let display = forms
                .iter()
                .map(|form| format!("{}:{}", form.code(), form.name()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", id, display)
        })
        .collect()
}
