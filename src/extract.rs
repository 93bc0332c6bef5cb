//! Main module for the map extraction core

pub mod comments;
pub mod entries;
pub mod forms;

pub use comments::strip_block_comments;
pub use entries::{parse_entry_map, EntryCollector, EntryMap};
pub use forms::{extract_forms, FormRecord};
