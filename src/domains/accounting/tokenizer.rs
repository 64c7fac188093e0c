//! Tokenizers used to measure rendered tool definitions.

use tiktoken_rs::CoreBPE;

/// A deterministic text to token-count function.
pub trait Tokenizer {
    /// Name of the encoding, recorded in exported token tables.
    fn encoding(&self) -> &str {
        "custom"
    }

    fn count(&self, text: &str) -> usize;
}

/// OpenAI `cl100k_base` BPE, the encoding the published counts are taken with.
#[derive(Clone, Copy)]
pub struct Cl100kTokenizer {
    bpe: &'static CoreBPE,
}

impl Cl100kTokenizer {
    pub const ENCODING: &'static str = "cl100k_base";

    /// Shares one process-wide BPE table across all instances.
    pub fn new() -> Self {
        Self {
            bpe: tiktoken_rs::cl100k_base_singleton(),
        }
    }
}

impl Default for Cl100kTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Cl100kTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cl100kTokenizer").finish_non_exhaustive()
    }
}

impl Tokenizer for Cl100kTokenizer {
    fn encoding(&self) -> &str {
        Self::ENCODING
    }

    fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> usize,
{
    fn count(&self, text: &str) -> usize {
        self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cl100k_counts() {
        let tokenizer = Cl100kTokenizer::new();
        assert_eq!(tokenizer.count(""), 0);
        assert_eq!(tokenizer.count("hello world"), 2);
        assert_eq!(tokenizer.encoding(), "cl100k_base");
    }

    #[test]
    fn test_closure_tokenizer() {
        let words = |text: &str| text.split_whitespace().count();
        assert_eq!(words.count("  one two\nthree "), 3);
        assert_eq!(words.encoding(), "custom");
    }
}
