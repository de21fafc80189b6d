//! Crate constants and runtime configuration defaults

// Question shape constants
/// Placeholder substituted for the hidden token in a question
pub const BLANK_MARKER: &str = "______";

/// Maximum number of answer options per question
pub const MAX_OPTIONS: usize = 4;

/// Minimum number of additional correct answers drawn per question
pub const EXTRA_CORRECT_MIN: u32 = 1;

/// Maximum number of additional correct answers drawn per question
pub const EXTRA_CORRECT_MAX: u32 = 2;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of questions when none is requested
pub const DEFAULT_QUESTION_COUNT: usize = 5;

// Batch-mode input and output settings
/// File extension accepted as batch input
pub const INPUT_EXTENSION: &str = "txt";

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_quiz";

// Image compositing and enhancement settings
/// Foreground density above which the annotated left half is preferred
pub const FOREGROUND_SPLIT_THRESHOLD: f64 = 0.5;

/// Default histogram clip limit for adaptive equalization
pub const DEFAULT_CLIP_LIMIT: f64 = 2.0;

/// Default number of equalization tiles per image axis
pub const DEFAULT_TILE_GRID: usize = 8;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
