//! Fill-in-the-blank quiz generation from plain text with annotation compositing utilities
//!
//! The system segments a paragraph into sentences, blanks out a randomly chosen word,
//! and builds multiple-choice questions whose options are drawn from the document's
//! own vocabulary. A companion module composites annotated image halves onto their
//! originals and applies adaptive histogram equalization.

#![forbid(unsafe_code)]

/// Image compositing and contrast enhancement for annotation workflows
pub mod blend;
/// Input/output operations and error handling
pub mod io;
/// Question construction, option sampling, and quiz formatting
pub mod quiz;
/// Sentence segmentation and tokenization for plain text
pub mod text;

pub use io::error::{QuizError, Result};
