// ============================================================
// Layer 4 — Corpus Loaders
// ============================================================
// Loads raw articles from the two supported corpus formats:
//
//   JsonlLoader   — news-dump format: one JSON object per line
//                   with a `text` field (and optionally `title`)
//   TextDirLoader — a directory where every .txt file is one
//                   article
//
// Both implement the ArticleSource trait from Layer 3, so the
// application layer never knows which format it is reading.
//
// A malformed line or unreadable file is logged and skipped —
// one bad article must not kill a 100k-article preparation run.
//
// concat_articles() is the corpus-fetch helper: it joins the
// first `limit` article texts with single spaces into the one
// long string the batch former consumes.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::domain::article::Article;
use crate::domain::traits::ArticleSource;

/// Wire format of one JSONL line. Only `text` is required;
/// a missing `title` falls back to file:line as the source.
#[derive(Debug, Deserialize)]
struct JsonlRecord {
    #[serde(default)]
    title: Option<String>,
    text:  String,
}

/// Loads articles from a JSONL dump file.
pub struct JsonlLoader {
    /// Path to the .jsonl file
    path: String,
}

impl JsonlLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl ArticleSource for JsonlLoader {
    fn load_all(&self) -> Result<Vec<Article>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read corpus file '{}'", self.path))?;

        let mut articles = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<JsonlRecord>(line) {
                Ok(rec) => {
                    let source = rec
                        .title
                        .unwrap_or_else(|| format!("{}:{}", self.path, line_no + 1));
                    articles.push(Article::new(source, rec.text));
                }
                // Log a warning but continue — don't fail on one bad line
                Err(e) => {
                    tracing::warn!(
                        "Skipping malformed line {} in '{}': {}",
                        line_no + 1,
                        self.path,
                        e
                    );
                }
            }
        }

        tracing::info!("Loaded {} articles from '{}'", articles.len(), self.path);
        Ok(articles)
    }
}

/// Loads all .txt files from a given directory.
pub struct TextDirLoader {
    /// Path to the directory containing .txt files
    dir: String,
}

impl TextDirLoader {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArticleSource for TextDirLoader {
    fn load_all(&self) -> Result<Vec<Article>> {
        let dir = Path::new(&self.dir);

        // A missing directory yields an empty corpus rather than
        // an error, so the pipeline can run in demo mode.
        if !dir.exists() {
            tracing::warn!(
                "Corpus directory '{}' does not exist — returning empty corpus",
                self.dir
            );
            return Ok(Vec::new());
        }

        let mut articles = Vec::new();

        for entry in fs::read_dir(dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir))?
        {
            let entry = entry?;
            let path  = entry.path();

            // Only process files with the .txt extension
            if path.extension().and_then(|e| e.to_str()) == Some("txt") {
                match fs::read_to_string(&path) {
                    Ok(text) => {
                        let source = path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("unknown")
                            .to_string();
                        tracing::debug!("Loaded: {} ({} chars)", source, text.len());
                        articles.push(Article::new(source, text));
                    }
                    Err(e) => {
                        tracing::warn!("Skipping '{}': {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("Loaded {} articles from '{}'", articles.len(), self.dir);
        Ok(articles)
    }
}

/// Join the first `limit` article texts with single spaces.
/// This is the string the batch former consumes.
pub fn concat_articles(source: &dyn ArticleSource, limit: usize) -> Result<String> {
    let articles = source.load_all()?;
    let taken    = articles.len().min(limit);

    let line = articles
        .iter()
        .take(limit)
        .map(|a| a.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    tracing::info!("Concatenated {} articles into {} chars", taken, line.len());
    Ok(line)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory source so the concat tests need no files
    struct FakeSource(Vec<Article>);

    impl ArticleSource for FakeSource {
        fn load_all(&self) -> Result<Vec<Article>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_concat_joins_with_single_spaces() {
        let src = FakeSource(vec![
            Article::new("a", "first article"),
            Article::new("b", "second article"),
        ]);
        assert_eq!(
            concat_articles(&src, 1000).unwrap(),
            "first article second article"
        );
    }

    #[test]
    fn test_concat_respects_limit() {
        let src = FakeSource(vec![
            Article::new("a", "one"),
            Article::new("b", "two"),
            Article::new("c", "three"),
        ]);
        assert_eq!(concat_articles(&src, 2).unwrap(), "one two");
    }

    #[test]
    fn test_jsonl_skips_malformed_lines() {
        let path = std::env::temp_dir().join(format!("spell_prep_loader_{}.jsonl", std::process::id()));
        fs::write(
            &path,
            "{\"title\":\"ok\",\"text\":\"hello world\"}\nnot json at all\n{\"text\":\"second\"}\n",
        )
        .unwrap();

        let loader   = JsonlLoader::new(path.to_str().unwrap());
        let articles = loader.load_all().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].source, "ok");
        assert_eq!(articles[0].text, "hello world");
        assert_eq!(articles[1].text, "second");
    }

    #[test]
    fn test_missing_dir_yields_empty_corpus() {
        let loader = TextDirLoader::new("/definitely/not/a/real/dir");
        assert!(loader.load_all().unwrap().is_empty());
    }
}
