use std::path::Path;

use log::{Level, debug, info, log};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    algorithm::difficulty::{Difficulty, adjust_words_for_difficulty},
    algorithm::placement::{WordRole, try_place},
    io::configuration::MAX_GRID_SIZE,
    io::error::{PuzzleError, Result, invalid_parameter},
    spatial::{Grid, PlacedWord},
    words::Dictionary,
    words::normalize::{is_valid_word, prepare_target_words},
};

/// What to build: grid size, target words and difficulty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRequest {
    /// Grid dimension
    pub size: usize,
    /// Target words as supplied by the caller, before normalization
    pub words: Vec<String>,
    /// Difficulty level, validated to 1-9
    pub difficulty: i64,
    /// Limit close-match decoys per target word to the difficulty's cap
    pub cap_close_matches: bool,
    /// Raise per-word placement diagnostics from debug to info
    pub verbose: bool,
}

impl PuzzleRequest {
    /// Request with the default decoy policy and quiet diagnostics
    pub fn new<S: AsRef<str>>(size: usize, words: &[S], difficulty: i64) -> Self {
        Self {
            size,
            words: words.iter().map(|word| word.as_ref().to_string()).collect(),
            difficulty,
            cap_close_matches: false,
            verbose: false,
        }
    }
}

/// A finished puzzle: the grid and where each target word went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Display and solution planes
    pub grid: Grid,
    /// Target words in placement order (longest first)
    pub placed_words: Vec<PlacedWord>,
}

/// Progress of a single generation run
///
/// Stages advance strictly in declaration order; `Failed` is terminal and
/// reachable only from validation or target placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    /// Grid allocated
    Created,
    /// Difficulty, size and words accepted
    WordsValidated,
    /// Every target word is on the grid
    TargetWordsPlaced,
    /// Random and close-match decoys attempted
    DecoysPlaced,
    /// Remaining blanks replaced by random letters
    Filled,
    /// Puzzle ready to hand over
    Done,
    /// Validation or target placement failed
    Failed,
}

/// Drives one puzzle through its stages
///
/// Owns the grid exclusively; each call to [`PuzzleExecutor::execute_stage`]
/// performs exactly one transition.
pub struct PuzzleExecutor<'d, R: rand::Rng> {
    request: PuzzleRequest,
    dictionary: &'d Dictionary,
    rng: R,
    grid: Grid,
    placed_words: Vec<PlacedWord>,
    words: Vec<String>,
    difficulty: Option<Difficulty>,
    stage: GenerationStage,
    detail: Level,
}

impl<'d, R: rand::Rng> PuzzleExecutor<'d, R> {
    /// Allocate the grid for `request`
    ///
    /// Sizes above `MAX_GRID_SIZE` get an empty grid; validation rejects them.
    pub fn new(request: PuzzleRequest, dictionary: &'d Dictionary, rng: R) -> Self {
        let grid = Grid::new(if request.size <= MAX_GRID_SIZE {
            request.size
        } else {
            0
        });
        let detail = if request.verbose {
            Level::Info
        } else {
            Level::Debug
        };

        Self {
            request,
            dictionary,
            rng,
            grid,
            placed_words: Vec::new(),
            words: Vec::new(),
            difficulty: None,
            stage: GenerationStage::Created,
            detail,
        }
    }

    /// Current stage
    pub const fn stage(&self) -> GenerationStage {
        self.stage
    }

    /// Grid in its current state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Target words recorded so far
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed_words
    }

    /// Perform the next stage transition
    ///
    /// Returns `Ok(false)` once there is nothing left to do.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad difficulty, size or words, and a
    /// placement error naming the first target word that fits nowhere.
    /// Either moves the run to `Failed`.
    pub fn execute_stage(&mut self) -> Result<bool> {
        let outcome = match self.stage {
            GenerationStage::Created => self.validate().map(|()| GenerationStage::WordsValidated),
            GenerationStage::WordsValidated => self
                .place_target_words()
                .map(|()| GenerationStage::TargetWordsPlaced),
            GenerationStage::TargetWordsPlaced => {
                self.place_decoys();
                Ok(GenerationStage::DecoysPlaced)
            }
            GenerationStage::DecoysPlaced => {
                let filled = self.grid.fill_remaining(&mut self.rng);
                debug!("Filled {filled} empty cells");
                Ok(GenerationStage::Filled)
            }
            GenerationStage::Filled => {
                self.log_placements();
                Ok(GenerationStage::Done)
            }
            GenerationStage::Done | GenerationStage::Failed => return Ok(false),
        };

        match outcome {
            Ok(next) => {
                self.stage = next;
                Ok(true)
            }
            Err(error) => {
                self.stage = GenerationStage::Failed;
                Err(error)
            }
        }
    }

    /// Run every remaining stage and hand over the puzzle
    ///
    /// # Errors
    ///
    /// Propagates the first stage failure
    pub fn run(mut self) -> Result<Puzzle> {
        while self.execute_stage()? {}
        self.into_puzzle()
    }

    /// Take the finished puzzle
    ///
    /// # Errors
    ///
    /// Returns `Incomplete` unless the run reached `Done`
    pub fn into_puzzle(self) -> Result<Puzzle> {
        if self.stage != GenerationStage::Done {
            return Err(PuzzleError::Incomplete { stage: self.stage });
        }
        Ok(Puzzle {
            grid: self.grid,
            placed_words: self.placed_words,
        })
    }

    fn validate(&mut self) -> Result<()> {
        let difficulty = Difficulty::new(self.request.difficulty)?;

        if self.request.size == 0 || self.request.size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.request.size,
                &format!("grid size must be between 1 and {MAX_GRID_SIZE}"),
            ));
        }

        self.words = prepare_target_words(&self.request.words, self.request.size)?;
        self.difficulty = Some(difficulty);
        Ok(())
    }

    fn place_target_words(&mut self) -> Result<()> {
        for word in &self.words {
            log!(self.detail, "Attempting to insert word: {word}");
            if !try_place(
                &mut self.grid,
                &mut self.placed_words,
                word,
                WordRole::Target,
                &mut self.rng,
            ) {
                return Err(PuzzleError::Placement {
                    word: word.clone(),
                    grid_size: self.grid.size(),
                });
            }
            log!(self.detail, "Successfully inserted word: {word}");
        }
        Ok(())
    }

    fn place_decoys(&mut self) {
        let Some(difficulty) = self.difficulty else {
            return;
        };

        let random_words = self
            .dictionary
            .random_words(difficulty.random_word_count(), &mut self.rng);
        for word in &random_words {
            self.place_decoy(word);
        }

        let seeds = adjust_words_for_difficulty(&self.words, difficulty, &mut self.rng);
        for seed in &seeds {
            let mut close_matches = self.dictionary.close_matches(seed);
            if self.request.cap_close_matches {
                close_matches.truncate(difficulty.close_match_count());
            }
            for close_match in &close_matches {
                self.place_decoy(close_match);
            }
        }
    }

    fn place_decoy(&mut self, word: &str) {
        // Decoys must keep the grid letter-only
        if !is_valid_word(word) {
            debug!("Skipping decoy with non-letters: {word}");
            return;
        }
        let placed = try_place(
            &mut self.grid,
            &mut self.placed_words,
            word,
            WordRole::Decoy,
            &mut self.rng,
        );
        if !placed {
            debug!("Failed to insert decoy: {word}");
        }
    }

    fn log_placements(&self) {
        for placed in &self.placed_words {
            let [x, y] = placed.origin();
            let direction = placed.direction();
            log!(
                self.detail,
                "Word: {}, X: {x}, Y: {y}, dX: {}, dY: {}",
                placed.word(),
                direction.dx,
                direction.dy
            );
        }
    }
}

/// Reusable puzzle generator owning the random source
pub struct PuzzleGenerator<R: rand::Rng = StdRng> {
    rng: R,
}

impl PuzzleGenerator<StdRng> {
    /// Deterministic generator for reproducible puzzles
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system
    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: rand::Rng> PuzzleGenerator<R> {
    /// Wrap an existing random source
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Build one puzzle
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input or a placement error when a
    /// target word fits nowhere on a grid of the requested size
    pub fn generate(&mut self, request: &PuzzleRequest, dictionary: &Dictionary) -> Result<Puzzle> {
        info!("Generating puzzle of size {}", request.size);
        PuzzleExecutor::new(request.clone(), dictionary, &mut self.rng).run()
    }
}

/// Load the dictionary and build one puzzle with an OS-seeded random source
///
/// # Errors
///
/// Returns a validation error for bad input before the dictionary is touched,
/// a configuration error if the dictionary cannot be loaded, or a placement
/// error when a target word fits nowhere
pub fn generate_puzzle(request: &PuzzleRequest, dictionary_path: &Path) -> Result<Puzzle> {
    Difficulty::new(request.difficulty)?;
    prepare_target_words(&request.words, request.size)?;

    let dictionary = Dictionary::load(dictionary_path)?;
    PuzzleGenerator::from_os_entropy().generate(request, &dictionary)
}
