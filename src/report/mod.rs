//! Rendering of suggestions and assessments.
//!
//! Terminal output lives here; JSON output is plain
//! `serde_json::to_string_pretty` at the call site.

pub mod terminal;
