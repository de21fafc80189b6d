//! Token value type with punctuation and alphabetic classification

/// Smallest text unit produced by segmentation
///
/// A plain immutable record: the textual span plus its classification
/// flags. Tokens are compared by value, so two occurrences of the same
/// word in different sentences are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The textual content of the span
    pub text: String,
    /// Whether the span consists entirely of punctuation or symbols
    pub is_punct: bool,
    /// Whether the span consists entirely of alphabetic characters
    pub is_alpha: bool,
}

impl Token {
    /// Build a token from its text, deriving both classification flags
    ///
    /// A span counts as punctuation when every character is neither
    /// alphanumeric nor whitespace, and as alphabetic when every
    /// character is alphabetic. Empty spans carry neither flag.
    pub fn classify(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_punct =
            !text.is_empty() && text.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace());
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self {
            text,
            is_punct,
            is_alpha,
        }
    }

    /// Length of the token text in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
