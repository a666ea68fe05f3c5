// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - JsonlLoader implements ArticleSource
//   - TextDirLoader also implements ArticleSource
//   - The application layer only sees ArticleSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::article::Article;

// ─── ArticleSource ────────────────────────────────────────────────────────────
/// Any component that can load articles from a corpus feed.
///
/// Implementations:
///   - JsonlLoader   → one JSON article per line (news-dump format)
///   - TextDirLoader → one .txt file per article
///   - (future) HttpLoader → pulls articles from a live feed
pub trait ArticleSource {
    /// Load all available articles from this source.
    /// Returns a Vec of Articles or an error.
    fn load_all(&self) -> Result<Vec<Article>>;
}
