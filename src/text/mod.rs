//! Text segmentation into sentences, tokens and vocabulary

/// Document and sentence containers produced by segmentation
pub mod document;
/// Sentence boundary detection and tokenization
pub mod segmenter;
/// Token value type and classification
pub mod token;
