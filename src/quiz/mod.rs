//! Quiz generation: sampling, question assembly and rendering

/// Rendering of questions into printable text blocks
pub mod format;
/// Question generation pipeline and batch driver
pub mod generator;
/// Question value type
pub mod question;
/// Seeded randomness for generation draws
pub mod sampler;
