//! Entry collection
//!
//! The two-state line machine that turns comment-stripped source text into
//! an [`EntryMap`]. Outside a block it looks for entry key lines; inside a
//! block it accumulates form tuples until the closing bracket line. The
//! machine is lenient: anything it does not recognize is noise, not an
//! error, so partial or loosely structured source degrades to whatever is
//! recognizable instead of aborting.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::comments::strip_block_comments;
use crate::extract::forms::{extract_forms, FormRecord};

/// Identifier -> ordered forms, in source declaration order.
///
/// `IndexMap` carries the map literal's own semantics: first-insertion order
/// is kept, and re-inserting an identifier overwrites the value in place
/// (last write wins).
pub type EntryMap = IndexMap<String, Vec<FormRecord>>;

/// Lazy-compiled regex for an entry key line: a quoted numeric key, a colon,
/// and the value remainder.
static KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^'(?P<id>\d+)'\s*:\s*(?P<value>.+)$").unwrap());

/// Stateful per-line collector for map entries.
///
/// Feed lines in source order with [`feed_line`](Self::feed_line), then call
/// [`finish`](Self::finish). A block still open at end of input is committed
/// rather than dropped, so a missing terminator never loses data.
pub struct EntryCollector {
    entries: EntryMap,
    current_id: Option<String>,
    current_forms: Vec<FormRecord>,
}

impl EntryCollector {
    pub fn new() -> Self {
        Self {
            entries: EntryMap::new(),
            current_id: None,
            current_forms: Vec::new(),
        }
    }

    /// Process one source line.
    pub fn feed_line(&mut self, raw_line: &str) {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with("export") {
            return;
        }

        // Inside a multi-line block: a `]` line closes it, anything else
        // contributes its tuples.
        if let Some(id) = self.current_id.take() {
            if line.starts_with(']') {
                self.entries
                    .insert(id, std::mem::take(&mut self.current_forms));
            } else {
                self.current_forms.extend(extract_forms(line));
                self.current_id = Some(id);
            }
            return;
        }

        let Some(caps) = KEY_REGEX.captures(line.trim_end_matches(',')) else {
            return;
        };
        let id = caps["id"].to_string();
        let value = caps["value"].trim_end_matches(',').trim();

        if is_complete_list(value) {
            self.entries.insert(id, extract_forms(value));
            return;
        }

        // Start of a multi-line block; the opening line may already carry
        // tuples.
        self.current_id = Some(id);
        self.current_forms.clear();
        if !value.is_empty() && value != "[" {
            self.current_forms.extend(extract_forms(value));
        }
    }

    /// Commit any block still open and return the finished map.
    pub fn finish(mut self) -> EntryMap {
        if let Some(id) = self.current_id.take() {
            self.entries.insert(id, self.current_forms);
        }
        self.entries
    }
}

impl Default for EntryCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `value` is a whole bracketed list on one line. A balanced bracket
/// count stands in for real nesting awareness; it is enough for the shapes
/// the target literal produces.
fn is_complete_list(value: &str) -> bool {
    value.starts_with('[')
        && value.ends_with(']')
        && value.matches('[').count() == value.matches(']').count()
}

/// Parse `source` into an [`EntryMap`]: strip block comments, then run the
/// collector over every line.
pub fn parse_entry_map(source: &str) -> EntryMap {
    let stripped = strip_block_comments(source);
    let mut collector = EntryCollector::new();
    for line in stripped.lines() {
        collector.feed_line(line);
    }
    collector.finish()
}
