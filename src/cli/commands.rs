// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `sample`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, u64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::prepare_use_case::PrepareConfig;
use crate::application::sample_use_case::SampleConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare noisy/clean sentence-pair batches from a corpus
    Prepare(PrepareArgs),

    /// Print a few random noisy/clean pairs for inspection
    Sample(SampleArgs),
}

/// All arguments for the `prepare` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Corpus location: a .jsonl dump file (one article per
    /// line with a "text" field) or a directory of .txt files
    #[arg(long, default_value = "data/corpus.jsonl")]
    pub corpus: String,

    /// Directory to save batches, vocabulary, config and stats
    #[arg(long, default_value = "prepared")]
    pub out_dir: String,

    /// Number of sentence pairs per batch
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Target number of words per sentence.
    /// A sentence actually carries words + 1 space-delimited
    /// tokens — the boundary fires on the space count.
    #[arg(long, default_value_t = 10)]
    pub words_per_sentence: usize,

    /// How many articles of the corpus to use
    #[arg(long, default_value_t = 1000)]
    pub article_limit: usize,

    /// Seed for the noise RNG — omit for a fresh corruption
    /// pattern on every run
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Convert CLI PrepareArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            corpus_path:        a.corpus,
            out_dir:            a.out_dir,
            batch_size:         a.batch_size,
            words_per_sentence: a.words_per_sentence,
            article_limit:      a.article_limit,
            seed:               a.seed,
        }
    }
}

/// All arguments for the `sample` command
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Corpus location (same formats as `prepare`)
    #[arg(long, default_value = "data/corpus.jsonl")]
    pub corpus: String,

    /// How many pairs to print
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Target number of words per sentence
    #[arg(long, default_value_t = 10)]
    pub words_per_sentence: usize,

    /// How many articles of the corpus to use
    #[arg(long, default_value_t = 100)]
    pub article_limit: usize,

    /// Seed for the noise RNG
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<SampleArgs> for SampleConfig {
    fn from(a: SampleArgs) -> Self {
        SampleConfig {
            corpus_path:        a.corpus,
            count:              a.count,
            words_per_sentence: a.words_per_sentence,
            article_limit:      a.article_limit,
            seed:               a.seed,
        }
    }
}
