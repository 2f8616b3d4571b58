//! Basic document statistics.

use crate::text::{self, TokenSet};

use super::ratio;
use super::reports::BasicStats;

/// Compute character, word, sentence and paragraph counts.
///
/// `tokens` must come from [`text::tokenize`] over the same `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn basic_stats(text: &str, tokens: &TokenSet<'_>) -> BasicStats {
    let character_count = text.chars().count();
    let spaces = text.chars().filter(|&c| is_space(c)).count();
    let word_chars: usize = tokens.words.iter().map(|w| w.chars().count()).sum();

    BasicStats {
        character_count,
        character_count_no_spaces: character_count - spaces,
        word_count: tokens.word_count(),
        sentence_count: tokens.sentence_count(),
        paragraph_count: text::split_paragraphs(text).len(),
        average_words_per_sentence: ratio(tokens.word_count(), tokens.sentence_count()),
        average_characters_per_word: ratio(word_chars, tokens.word_count()),
    }
}

/// ASCII space or a Unicode `Zs` space separator.
///
/// Tabs and line breaks are whitespace but not spaces.
const fn is_space(c: char) -> bool {
    matches!(
        c,
        ' ' | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    fn stats(text: &str) -> BasicStats {
        basic_stats(text, &tokenize(text))
    }

    #[test]
    fn cats_and_dogs() {
        let s = stats("Cats run. Dogs run fast!");
        assert_eq!(s.word_count, 5);
        assert_eq!(s.sentence_count, 2);
        assert_eq!(s.paragraph_count, 1);
        assert_eq!(s.average_words_per_sentence, 2.5);
        assert_eq!(s.character_count, 24);
        assert_eq!(s.character_count_no_spaces, 20);
        // cats run dogs run fast = 4 + 3 + 4 + 3 + 4
        assert_eq!(s.average_characters_per_word, 18.0 / 5.0);
    }

    #[test]
    fn empty_text_is_all_zero() {
        assert_eq!(stats(""), BasicStats::default());
    }

    #[test]
    fn whitespace_only_has_no_words() {
        let s = stats("  \n\n  ");
        assert_eq!(s.character_count, 6);
        assert_eq!(s.character_count_no_spaces, 2);
        assert_eq!(s.word_count, 0);
        assert_eq!(s.paragraph_count, 0);
        assert_eq!(s.average_words_per_sentence, 0.0);
        assert_eq!(s.average_characters_per_word, 0.0);
    }

    #[test]
    fn character_count_is_code_points() {
        let text = "日本語のテキスト。Ünïcödé!";
        assert_eq!(stats(text).character_count, text.chars().count());
        assert!(text.len() > text.chars().count());
    }

    #[test]
    fn unicode_spaces_removed() {
        let s = stats("a\u{00A0}b\u{3000}c d\te");
        assert_eq!(s.character_count, 9);
        // tab stays, three spaces go
        assert_eq!(s.character_count_no_spaces, 6);
    }

    #[test]
    fn paragraphs_counted() {
        let s = stats("One.\n\nTwo.\n\n\nThree.\nStill three.");
        assert_eq!(s.paragraph_count, 3);
        assert_eq!(s.sentence_count, 4);
    }

    #[test]
    fn single_word() {
        let s = stats("hello");
        assert_eq!(s.word_count, 1);
        assert_eq!(s.sentence_count, 1);
        assert_eq!(s.average_words_per_sentence, 1.0);
        assert_eq!(s.average_characters_per_word, 5.0);
    }
}
