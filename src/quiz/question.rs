//! Question value type emitted by the generator

/// A single fill-in-the-blank question with its answer key
///
/// Immutable once built. The correct answers are a subset of the
/// display options; the prompt carries exactly one blank marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answers: Vec<String>,
}

impl Question {
    /// Assemble a question from its prompt, options and answer key
    pub const fn new(prompt: String, options: Vec<String>, correct_answers: Vec<String>) -> Self {
        Self {
            prompt,
            options,
            correct_answers,
        }
    }

    /// Sentence text with the hidden word replaced by the blank marker
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answer options in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The option texts that count as correct answers
    pub fn correct_answers(&self) -> &[String] {
        &self.correct_answers
    }
}
