// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — runs the full pipeline and saves the batches
//   2. `sample`  — prints a few noisy/clean pairs to the terminal
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PrepareArgs, SampleArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "spell-prep",
    version = "0.1.0",
    about = "Prepare noisy/clean sentence-pair batches for a spelling-correction model."
)]
pub struct Cli {
    /// The subcommand to run (prepare or sample)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => self.run_prepare(args),
            Commands::Sample(args)  => self.run_sample(args),
        }
    }

    /// Handles the `prepare` subcommand.
    /// Converts CLI args into a PrepareConfig and hands off to Layer 2.
    fn run_prepare(&self, args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Starting preparation from corpus: {}", args.corpus);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = PrepareUseCase::new(args.into());
        let summary  = use_case.execute()?;

        println!(
            "Prepared {} batches ({} sentence pairs, vocabulary of {} characters).",
            summary.num_batches, summary.num_sentences, summary.vocab_size,
        );
        Ok(())
    }

    /// Handles the `sample` subcommand.
    /// Runs the pipeline in memory and prints the drawn pairs.
    fn run_sample(&self, args: SampleArgs) -> Result<()> {
        use crate::application::sample_use_case::SampleUseCase;

        let use_case = SampleUseCase::new(args.into());
        let samples  = use_case.execute()?;

        for (i, s) in samples.iter().enumerate() {
            println!("pair {:>2}", i + 1);
            println!("  clean: {}", s.clean);
            println!("  noisy: {}", s.noisy);
        }
        Ok(())
    }
}
