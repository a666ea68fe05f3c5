// ============================================================
// Layer 3 — Article Domain Type
// ============================================================
// Represents a single article pulled from the corpus feed.
// This is a plain data struct with no behaviour —
// just a source name and the raw text content.
//
// Using #[derive(Debug, Clone)] gives us:
//   - Debug: lets us print the struct with {:?}
//   - Clone: lets us make copies of the struct
//   - Serialize/Deserialize: lets us read/write it as JSON
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// A raw article from the corpus feed.
/// Source-agnostic — by the time an Article is created, the
/// text has already been pulled out of whatever container
/// (JSONL dump, plain .txt file) it arrived in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Where the article came from — kept for traceability
    /// so corpus problems can be traced back to a file or line
    pub source: String,

    /// The full raw text of the article,
    /// before any lowercasing or filtering
    pub text: String,
}

impl Article {
    /// Create a new Article with a source label and text content.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }
}
