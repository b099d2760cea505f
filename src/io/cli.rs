//! Command-line interface: read a puzzle description, generate, print and save

use crate::algorithm::executor::{Puzzle, PuzzleGenerator, PuzzleRequest};
use crate::io::configuration::{MAX_GRID_SIZE, PuzzleConfig, TEXT_EXTENSION};
use crate::io::error::Result;
use crate::io::progress::SizingProgress;
use crate::io::text::{print_puzzle, render_word_list, save_puzzle};
use crate::words::Dictionary;
use crate::words::normalize::longest_word_length;
use clap::Parser;
use log::{debug, info};
use rand::Rng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(
    author,
    version,
    about = "Generate word-search puzzles with decoys from a YAML description"
)]
/// Command-line arguments for the puzzle generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// YAML puzzle description (title, size, columns, difficulty, words)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Dictionary file with one word per line, used for decoys
    #[arg(short, long)]
    pub dictionary: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Random seed for reproducible puzzles
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Limit close-match decoys per word to the difficulty level
    #[arg(long)]
    pub cap_close_matches: bool,

    /// Leave the solution out of the text file
    #[arg(long)]
    pub no_solution: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the solution should be written
    pub const fn include_solution(&self) -> bool {
        !self.no_solution
    }
}

/// Runs one puzzle description from configuration to result file
pub struct PuzzleRunner {
    cli: Cli,
    progress: SizingProgress,
}

impl PuzzleRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            SizingProgress::new()
        } else {
            SizingProgress::hidden()
        };

        Self { cli, progress }
    }

    /// Generate, print and save the puzzle described by the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or dictionary cannot be loaded,
    /// the puzzle cannot be generated, or the result file cannot be written
    pub fn process(&mut self) -> Result<()> {
        let config = PuzzleConfig::from_yaml_file(&self.cli.config)?;
        let dictionary = Dictionary::load(&self.cli.dictionary)?;

        let puzzle = match self.cli.seed {
            Some(seed) => {
                self.generate(&config, &dictionary, &mut PuzzleGenerator::from_seed(seed))?
            }
            None => self.generate(
                &config,
                &dictionary,
                &mut PuzzleGenerator::from_os_entropy(),
            )?,
        };

        Self::print(&config, &puzzle);

        let output_path = Self::get_output_path(&config);
        save_puzzle(&puzzle, &output_path, self.cli.include_solution())?;
        info!("Saved puzzle to {}", output_path.display());

        Ok(())
    }

    /// Generate at the configured size, or grow the grid until every word fits
    ///
    /// Auto-sizing starts at the longest word and retries only on placement
    /// failures, stopping at `MAX_GRID_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns the first non-placement error, or the last placement error
    pub fn generate<R: Rng>(
        &mut self,
        config: &PuzzleConfig,
        dictionary: &Dictionary,
        generator: &mut PuzzleGenerator<R>,
    ) -> Result<Puzzle> {
        let auto_size = config.auto_size();
        let mut size = if auto_size {
            longest_word_length(&config.words).max(1)
        } else {
            config.size
        };
        debug!("size={}, auto_size={auto_size}", config.size);

        loop {
            self.progress.start_attempt(size);
            let request = self.request_for(config, size);

            match generator.generate(&request, dictionary) {
                Ok(puzzle) => {
                    self.progress.finish();
                    info!(
                        "Generated puzzle of size {size} after {} attempt(s)",
                        self.progress.attempts()
                    );
                    return Ok(puzzle);
                }
                Err(error) if auto_size && error.is_retryable() && size < MAX_GRID_SIZE => {
                    debug!("{error}; retrying with size {}", size + 1);
                    size += 1;
                }
                Err(error) => {
                    self.progress.finish();
                    return Err(error);
                }
            }
        }
    }

    fn request_for(&self, config: &PuzzleConfig, size: usize) -> PuzzleRequest {
        PuzzleRequest {
            size,
            words: config.words.clone(),
            difficulty: config.difficulty,
            cap_close_matches: self.cli.cap_close_matches,
            verbose: self.cli.verbose,
        }
    }

    // Allow print for the puzzle itself
    #[allow(clippy::print_stdout)]
    fn print(config: &PuzzleConfig, puzzle: &Puzzle) {
        println!("{}", config.title);
        print_puzzle(puzzle);
        println!();
        print!(
            "{}",
            render_word_list(&config.words, config.resolved_columns())
        );
    }

    /// Result file path for a configuration: `<output_basename>.txt`
    pub fn get_output_path(config: &PuzzleConfig) -> PathBuf {
        PathBuf::from(format!("{}.{TEXT_EXTENSION}", config.output_basename))
    }
}
