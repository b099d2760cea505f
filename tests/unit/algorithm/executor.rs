//! Tests for puzzle orchestration and its stage transitions

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use wordsearch::algorithm::executor::{
        GenerationStage, PuzzleExecutor, PuzzleGenerator, PuzzleRequest,
    };
    use wordsearch::io::configuration::BLANK;
    use wordsearch::spatial::Plane;
    use wordsearch::words::Dictionary;
    use wordsearch::{ErrorKind, PuzzleError};

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["A", "I", "PEAR", "PLUM", "LIME", "FIG", "DATE", "KIWI"])
    }

    // Tests each call performs exactly one transition in order
    // Verified by merging decoy placement into the fill stage
    #[test]
    fn test_stage_sequence() {
        let dictionary = dictionary();
        let request = PuzzleRequest::new(8, &["apple", "melon"], 2);
        let mut executor =
            PuzzleExecutor::new(request, &dictionary, StdRng::seed_from_u64(1));

        let expected = [
            GenerationStage::WordsValidated,
            GenerationStage::TargetWordsPlaced,
            GenerationStage::DecoysPlaced,
            GenerationStage::Filled,
            GenerationStage::Done,
        ];

        assert_eq!(executor.stage(), GenerationStage::Created);
        for stage in expected {
            assert!(executor.execute_stage().unwrap());
            assert_eq!(executor.stage(), stage);
        }
        assert!(!executor.execute_stage().unwrap());
        assert_eq!(executor.placed_words().len(), 2);
    }

    // Tests target words are placed before any decoy appears
    // Verified by placing random words ahead of targets
    #[test]
    fn test_targets_only_after_target_stage() {
        let dictionary = dictionary();
        let request = PuzzleRequest::new(7, &["grape"], 5);
        let mut executor =
            PuzzleExecutor::new(request, &dictionary, StdRng::seed_from_u64(3));

        executor.execute_stage().unwrap();
        executor.execute_stage().unwrap();

        let grid = executor.grid();
        assert_eq!(grid.blank_count(Plane::Display), 49 - 5);
        assert_eq!(grid.blank_count(Plane::Solution), 49 - 5);
    }

    #[test]
    fn test_invalid_difficulty_fails_validation() {
        let dictionary = dictionary();
        let request = PuzzleRequest::new(8, &["apple"], 0);
        let mut executor =
            PuzzleExecutor::new(request, &dictionary, StdRng::seed_from_u64(1));

        let error = executor.execute_stage().unwrap_err();

        assert!(matches!(error, PuzzleError::InvalidDifficulty { value: 0 }));
        assert_eq!(executor.stage(), GenerationStage::Failed);
        assert!(!executor.execute_stage().unwrap());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let dictionary = dictionary();
        let request = PuzzleRequest::new(0, &["a"], 1);

        let error = PuzzleGenerator::from_seed(1)
            .generate(&request, &dictionary)
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    // Tests the first unplaceable target aborts the run and is named
    // Verified by skipping target words that fail to place
    #[test]
    fn test_placement_failure_names_word() {
        let dictionary = dictionary();
        let request = PuzzleRequest::new(2, &["ab", "cd", "ef"], 1);
        let mut executor =
            PuzzleExecutor::new(request, &dictionary, StdRng::seed_from_u64(9));

        executor.execute_stage().unwrap();
        let error = executor.execute_stage().unwrap_err();

        assert!(matches!(
            error,
            PuzzleError::Placement { ref word, grid_size: 2 } if word == "EF"
        ));
        assert!(error.is_retryable());
        assert_eq!(executor.stage(), GenerationStage::Failed);
    }

    #[test]
    fn test_into_puzzle_requires_done() {
        let dictionary = dictionary();
        let request = PuzzleRequest::new(5, &["kiwi"], 1);
        let mut executor =
            PuzzleExecutor::new(request, &dictionary, StdRng::seed_from_u64(1));
        executor.execute_stage().unwrap();

        let error = executor.into_puzzle().unwrap_err();

        assert!(matches!(
            error,
            PuzzleError::Incomplete {
                stage: GenerationStage::WordsValidated
            }
        ));
    }

    // Tests duplicates are placed independently and both recorded
    // Verified by deduplicating validated words
    #[test]
    fn test_duplicate_words_are_both_placed() {
        let dictionary = dictionary();
        let request = PuzzleRequest::new(4, &["ice", "ICE"], 1);

        let puzzle = PuzzleGenerator::from_seed(5)
            .generate(&request, &dictionary)
            .unwrap();

        assert_eq!(puzzle.placed_words.len(), 2);
        assert!(puzzle.placed_words.iter().all(|placed| placed.word() == "ICE"));
    }

    // Tests decoys never disturb target letters at the highest difficulty
    // Verified by letting decoys overwrite occupied cells
    #[test]
    fn test_solution_consistent_after_decoys() {
        let dictionary = dictionary();
        let request = PuzzleRequest::new(9, &["pineapple", "mango", "papaya"], 9);

        let puzzle = PuzzleGenerator::from_seed(21)
            .generate(&request, &dictionary)
            .unwrap();

        let grid = &puzzle.grid;
        for x in 0..9 {
            for y in 0..9 {
                let shown = grid.letter([x, y]).unwrap();
                let solution = grid.solution_letter([x, y]).unwrap();
                assert!(shown.is_ascii_uppercase());
                assert!(solution == BLANK || solution == shown);
            }
        }
        for placed in &puzzle.placed_words {
            for (position, letter) in placed.cells() {
                assert_eq!(grid.solution_letter(position), Some(letter));
            }
        }
    }

    // Tests the close-match cap still yields a complete puzzle
    // Verified by truncating to zero close matches
    #[test]
    fn test_capped_close_matches() {
        let dictionary = dictionary();
        let mut request = PuzzleRequest::new(10, &["apple", "banana", "cherry"], 3);
        request.cap_close_matches = true;
        request.verbose = true;

        let puzzle = PuzzleGenerator::from_seed(8)
            .generate(&request, &dictionary)
            .unwrap();

        assert_eq!(puzzle.placed_words.len(), 3);
        assert_eq!(puzzle.grid.blank_count(Plane::Display), 0);
    }

    #[test]
    fn test_with_rng_matches_from_seed() {
        let dictionary = dictionary();
        let request = PuzzleRequest::new(8, &["lemon", "lime"], 4);

        let first = PuzzleGenerator::from_seed(77)
            .generate(&request, &dictionary)
            .unwrap();
        let second = PuzzleGenerator::with_rng(StdRng::seed_from_u64(77))
            .generate(&request, &dictionary)
            .unwrap();

        assert_eq!(first, second);
    }
}
