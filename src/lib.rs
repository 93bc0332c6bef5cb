//! # formdex
//!
//! Extracts the id -> form-name table embedded as a map literal in a
//! TypeScript source file and renders it as JSON.
//!
//! The interesting part lives in [`extract`]: a block-comment stripper and a
//! two-state line machine that recognize the literal's entry syntax without
//! pulling in any TypeScript tooling. [`report`] formats summaries and
//! samples over a finished map, and [`processor`] wraps the file-level
//! read/extract/render/write pipeline used by the `formdex` binary.

pub mod extract;
pub mod processor;
pub mod report;
