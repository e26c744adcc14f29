//! Sentence and word segmentation

use unicode_segmentation::UnicodeSegmentation;

/// Boundary detection capability used by the format classifier. No
/// grammatical analysis, just sentence and word splitting.
pub trait Tokenizer {
    fn sentences(&self, text: &str) -> Vec<String>;
    fn words(&self, text: &str) -> Vec<String>;
}

/// Tokenizer backed by Unicode sentence boundaries and whitespace words.
#[derive(Debug, Default, Clone)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn words(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|w| w.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_splitting() {
        let tokenizer = UnicodeTokenizer;
        let sentences = tokenizer.sentences("Led a team of five. Shipped two products. ");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Led a team of five.");
    }

    #[test]
    fn test_empty_text_has_no_sentences() {
        let tokenizer = UnicodeTokenizer;
        assert!(tokenizer.sentences("").is_empty());
        assert!(tokenizer.sentences("   \n  ").is_empty());
    }

    #[test]
    fn test_whitespace_words() {
        let tokenizer = UnicodeTokenizer;
        let words = tokenizer.words("Python,  AWS and\nDocker");

        assert_eq!(words, vec!["Python,", "AWS", "and", "Docker"]);
    }
}
