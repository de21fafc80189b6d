//! Segmented document model: sentences, tokens, and vocabulary

use super::token::Token;

/// A single sentence with its original text and token spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence from its raw text and classified tokens
    pub const fn new(text: String, tokens: Vec<Token>) -> Self {
        Self { text, tokens }
    }

    /// The sentence text exactly as it appeared in the source
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Token spans in sentence order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether at least one token is eligible to become a blank
    ///
    /// Punctuation tokens never become blanks; everything else does,
    /// including numbers.
    pub fn has_blankable_token(&self) -> bool {
        self.tokens.iter().any(|token| !token.is_punct)
    }
}

/// A fully segmented context: ordered sentences plus their vocabulary
///
/// The vocabulary is the sequence of distinct alphabetic token texts
/// in first-occurrence order across the whole document. It feeds both
/// the supplementary correct answers and the distractor pool, so its
/// order must be deterministic for a given input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sentences: Vec<Sentence>,
    vocabulary: Vec<String>,
}

impl Document {
    /// Assemble a document, deriving the vocabulary from the sentences
    pub fn new(sentences: Vec<Sentence>) -> Self {
        let mut vocabulary = Vec::new();
        for sentence in &sentences {
            for token in sentence.tokens() {
                if token.is_alpha && !vocabulary.contains(&token.text) {
                    vocabulary.push(token.text.clone());
                }
            }
        }
        Self {
            sentences,
            vocabulary,
        }
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Distinct alphabetic token texts in first-occurrence order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of sentences in the document
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Whether segmentation produced no sentences at all
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
