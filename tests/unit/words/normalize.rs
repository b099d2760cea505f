//! Tests for target word normalization, validation and ordering

#[cfg(test)]
mod tests {
    use wordsearch::PuzzleError;
    use wordsearch::words::normalize::{
        is_valid_word, longest_word_length, normalize_word, prepare_target_words, reverse_word,
    };

    // Tests whitespace anywhere is stripped and letters uppercased
    // Verified by trimming instead of removing all whitespace
    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  ice cream\t"), "ICECREAM");
        assert_eq!(normalize_word("Kiwi"), "KIWI");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("APPLE"));
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("1234"));
        assert!(!is_valid_word("CAN'T"));
        assert!(!is_valid_word("A-B"));
    }

    #[test]
    fn test_reverse_word() {
        assert_eq!(reverse_word("BANANA"), "ANANAB");
        assert_eq!(reverse_word(""), "");
    }

    // Tests longest-first ordering keeps input order among equal lengths
    // Verified by replacing the stable sort with sort_unstable_by_key
    #[test]
    fn test_prepare_sorts_longest_first_stably() {
        let raw = ["kiwi", "banana", "fig", "pear", "cherry"];

        let Ok(words) = prepare_target_words(&raw, 10) else {
            unreachable!("all words are valid");
        };

        assert_eq!(words, vec!["BANANA", "CHERRY", "KIWI", "PEAR", "FIG"]);
    }

    // Tests duplicates created by normalization are both kept
    // Verified by deduplicating in prepare_target_words
    #[test]
    fn test_prepare_keeps_duplicates() {
        let raw = ["ice cream", "IceCream"];

        let Ok(words) = prepare_target_words(&raw, 10) else {
            unreachable!("both words are valid");
        };

        assert_eq!(words, vec!["ICECREAM", "ICECREAM"]);
    }

    #[test]
    fn test_prepare_rejects_non_letters() {
        let result = prepare_target_words(&["apple", "1234"], 10);

        assert!(matches!(
            result,
            Err(PuzzleError::InvalidWord { ref word, .. }) if word == "1234"
        ));
    }

    #[test]
    fn test_prepare_rejects_blank_words() {
        let result = prepare_target_words(&["apple", "  "], 10);

        assert!(matches!(result, Err(PuzzleError::InvalidWord { .. })));
    }

    // Tests the length limit is the grid dimension, inclusive
    // Verified by using >= in the length comparison
    #[test]
    fn test_prepare_length_limit() {
        assert!(prepare_target_words(&["abc"], 3).is_ok());

        let result = prepare_target_words(&["banana"], 3);
        assert!(matches!(
            result,
            Err(PuzzleError::WordTooLong {
                length: 6,
                grid_size: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_prepare_rejects_empty_list() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            prepare_target_words(&empty, 5),
            Err(PuzzleError::NoWords)
        ));
    }

    #[test]
    fn test_longest_word_length() {
        assert_eq!(longest_word_length(&["a b c d", "xyz"]), 4);
        let empty: [String; 0] = [];
        assert_eq!(longest_word_length(&empty), 0);
    }
}
