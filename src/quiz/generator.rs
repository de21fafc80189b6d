//! Question generation pipeline over a segmented document

use crate::{
    io::configuration::{BLANK_MARKER, EXTRA_CORRECT_MAX, EXTRA_CORRECT_MIN, MAX_OPTIONS},
    quiz::question::Question,
    quiz::sampler::RandomSource,
    text::document::Document,
    text::segmenter,
};

/// Generation parameters controlling option counts
#[derive(Clone, Copy, Debug)]
pub struct QuizConfig {
    /// Maximum number of answer options per question
    pub max_options: usize,
    /// Smallest number of supplementary correct answers per question
    pub extra_correct_min: u32,
    /// Largest number of supplementary correct answers per question
    pub extra_correct_max: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_options: MAX_OPTIONS,
            extra_correct_min: EXTRA_CORRECT_MIN,
            extra_correct_max: EXTRA_CORRECT_MAX,
        }
    }
}

/// Record of a question slot that produced no question
#[derive(Debug)]
pub struct SkippedQuestion {
    /// One-based position of the slot in the requested batch
    slot: usize,
    /// Why the slot was abandoned
    reason: crate::io::error::QuizError,
}

impl SkippedQuestion {
    /// One-based position of the abandoned slot
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Why the slot produced no question
    pub const fn reason(&self) -> &crate::io::error::QuizError {
        &self.reason
    }
}

/// Outcome of a batch generation run
#[derive(Debug)]
pub struct GeneratedQuiz {
    questions: Vec<Question>,
    skipped: Vec<SkippedQuestion>,
}

impl GeneratedQuiz {
    /// Questions in generation order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Slots that were abandoned, with their reasons
    pub fn skipped(&self) -> &[SkippedQuestion] {
        &self.skipped
    }

    /// Consume the run and return its questions and skip records
    pub fn into_parts(self) -> (Vec<Question>, Vec<SkippedQuestion>) {
        (self.questions, self.skipped)
    }
}

/// Fill-in-the-blank question generator over a segmented document
///
/// Segments the context once, then runs one independent selection
/// pipeline per question: pick a sentence, hide one of its tokens,
/// and dress the answer key with supplementary correct answers and
/// distractors drawn from the document vocabulary.
pub struct QuizGenerator {
    document: Document,
    config: QuizConfig,
    random_source: RandomSource,
}

impl QuizGenerator {
    /// Segment a context and prepare a generator over it
    ///
    /// # Errors
    ///
    /// Returns an error if segmentation finds no sentences in the
    /// context.
    pub fn from_context(
        context: &str,
        config: QuizConfig,
        seed: u64,
    ) -> crate::io::error::Result<Self> {
        let document = segmenter::segment(context);
        if document.is_empty() {
            return Err(crate::io::error::QuizError::EmptyContext);
        }
        Ok(Self {
            document,
            config,
            random_source: RandomSource::new(seed),
        })
    }

    /// The segmented document questions are drawn from
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Generate one question
    ///
    /// # Errors
    ///
    /// Returns an error if no sentence in the document offers a
    /// non-punctuation token, or if option sampling requests more
    /// values than the vocabulary holds.
    pub fn next_question(&mut self) -> crate::io::error::Result<Question> {
        let (sentence_text, blank) = self.select_blank()?;
        let prompt = sentence_text.replacen(blank.as_str(), BLANK_MARKER, 1);

        let mut correct_answers = vec![blank.clone()];
        let pool: Vec<String> = self
            .document
            .vocabulary()
            .iter()
            .filter(|word| **word != blank)
            .cloned()
            .collect();

        let requested =
            self.random_source
                .between(self.config.extra_correct_min, self.config.extra_correct_max)
                as usize;
        let extras = self.random_source.sample(&pool, requested.min(pool.len()))?;

        let remainder: Vec<String> = pool
            .into_iter()
            .filter(|word| !extras.contains(word))
            .collect();
        correct_answers.extend(extras);

        let budget = self.config.max_options.saturating_sub(correct_answers.len());
        let distractors = self
            .random_source
            .sample(&remainder, budget.min(remainder.len()))?;

        let mut options: Vec<String> = correct_answers.iter().cloned().chain(distractors).collect();
        self.random_source.shuffle(&mut options);

        Ok(Question::new(prompt, options, correct_answers))
    }

    /// Generate a batch of questions
    ///
    /// Slots that fail are recorded with their reason; a failed slot
    /// never aborts the remaining ones.
    pub fn generate(&mut self, count: usize) -> GeneratedQuiz {
        let mut questions = Vec::with_capacity(count);
        let mut skipped = Vec::new();
        for slot in 1..=count {
            match self.next_question() {
                Ok(question) => questions.push(question),
                Err(reason) => skipped.push(SkippedQuestion { slot, reason }),
            }
        }
        GeneratedQuiz { questions, skipped }
    }

    /// Pick a sentence and the token to hide in it
    ///
    /// Sentences are visited in a shuffled order, each at most once,
    /// until one offers a non-punctuation token.
    fn select_blank(&mut self) -> crate::io::error::Result<(String, String)> {
        let mut order: Vec<usize> = (0..self.document.sentence_count()).collect();
        self.random_source.shuffle(&mut order);

        let mut visited = 0;
        for index in order {
            visited += 1;
            let Some(sentence) = self.document.sentences().get(index) else {
                continue;
            };
            let eligible: Vec<String> = sentence
                .tokens()
                .iter()
                .filter(|token| !token.is_punct)
                .map(|token| token.text.clone())
                .collect();
            if let Some(blank) = self.random_source.choose(&eligible) {
                return Ok((sentence.text().to_string(), blank.clone()));
            }
        }
        Err(crate::io::error::QuizError::InsufficientContent { attempts: visited })
    }
}

/// Segment a context and generate a batch of questions in one call
///
/// # Errors
///
/// Returns an error if the context contains no sentences.
pub fn build_quiz(
    context: &str,
    count: usize,
    seed: u64,
) -> crate::io::error::Result<GeneratedQuiz> {
    let mut generator = QuizGenerator::from_context(context, QuizConfig::default(), seed)?;
    Ok(generator.generate(count))
}
