// ============================================================
// Layer 5 — Batch Statistics Logger
// ============================================================
// Records per-batch statistics to a CSV file during a
// preparation run.
//
// Why log stats to CSV?
//   - Easy to open in a spreadsheet
//   - Can plot the noise level across the corpus
//   - Provides a permanent record of each preparation run
//
// Stats recorded per batch:
//   - batch:            the batch index (0, 1, 2, ...)
//   - sentences:        number of sentence pairs in the batch
//   - mean_clean_chars: average clean sentence length
//   - mean_noisy_chars: average corrupted sentence length
//
// Output file: <out_dir>/batch_stats.csv
//
// How to read the stats:
//   - mean_noisy_chars tracks mean_clean_chars from below;
//     the gap is the average number of deleted characters
//   - a gap near zero means the coin flips mostly missed
//   - the gap can never exceed 4 (two corruption passes,
//     at most two deletions each)
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::data::batcher::EncodedBatch;

/// One row of statistics for a single emitted batch
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// The batch index (starts at 0)
    pub batch: usize,

    /// Number of sentence pairs in the batch
    pub sentences: usize,

    /// Average pre-EOS character count of the clean targets
    pub mean_clean_chars: f64,

    /// Average pre-EOS character count of the noisy inputs
    pub mean_noisy_chars: f64,
}

impl BatchStats {
    /// Compute the stats row for one (input, target) batch pair
    pub fn from_batch(batch: usize, input: &EncodedBatch, target: &EncodedBatch) -> Self {
        let sentences = input.len();
        let mean = |lengths: &[usize]| {
            if lengths.is_empty() {
                0.0
            } else {
                lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
            }
        };

        Self {
            batch,
            sentences,
            mean_clean_chars: mean(&target.lengths),
            mean_noisy_chars: mean(&input.lengths),
        }
    }
}

/// Logs batch stats to a CSV file for later analysis.
pub struct StatsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl StatsLogger {
    /// Create a new StatsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("batch_stats.csv");

        // Write CSV header only if file is new
        // This allows appending to an existing log across runs
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "batch,sentences,mean_clean_chars,mean_noisy_chars")?;
            tracing::debug!("Created stats CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one batch's stats as a new row in the CSV.
    pub fn log(&self, s: &BatchStats) -> Result<()> {
        // Open in append mode — adds to end of file
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        writeln!(
            f,
            "{},{},{:.2},{:.2}",
            s.batch,
            s.sentences,
            s.mean_clean_chars,
            s.mean_noisy_chars,
        )?;

        Ok(())
    }

    /// Return the path to the stats CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_batch_means() {
        let input = EncodedBatch {
            sequences: vec![vec![0, 9], vec![0, 1, 9]],
            lengths:   vec![1, 2],
        };
        let target = EncodedBatch {
            sequences: vec![vec![0, 1, 9], vec![0, 1, 2, 9]],
            lengths:   vec![2, 3],
        };

        let s = BatchStats::from_batch(7, &input, &target);
        assert_eq!(s.batch, 7);
        assert_eq!(s.sentences, 2);
        assert!((s.mean_noisy_chars - 1.5).abs() < 1e-9);
        assert!((s.mean_clean_chars - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch_means_are_zero() {
        let empty = EncodedBatch::default();
        let s = BatchStats::from_batch(0, &empty, &empty);
        assert_eq!(s.mean_clean_chars, 0.0);
        assert_eq!(s.mean_noisy_chars, 0.0);
    }
}
