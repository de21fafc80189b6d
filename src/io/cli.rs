//! Command-line interface for quiz generation and annotation-image tooling

use crate::blend::{composite, enhance};
use crate::io::configuration::{
    DEFAULT_CLIP_LIMIT, DEFAULT_QUESTION_COUNT, DEFAULT_SEED, DEFAULT_TILE_GRID, INPUT_EXTENSION,
    OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image;
use crate::io::progress::ProgressManager;
use crate::io::prompt;
use crate::quiz::format::{format_question, format_quiz};
use crate::quiz::generator::{QuizConfig, QuizGenerator};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quizsmith")]
#[command(
    author,
    version,
    about = "Generate fill-in-the-blank quizzes and composite annotation images"
)]
/// Command-line arguments for the quiz and image tools
pub struct Cli {
    /// Which tool to run
    #[command(subcommand)]
    pub command: Command,
}

/// The tools hosted by this binary
#[derive(Subcommand)]
pub enum Command {
    /// Generate fill-in-the-blank quizzes from text
    Quiz {
        /// Input text file or directory; prompts interactively when omitted
        #[arg(value_name = "TARGET")]
        target: Option<PathBuf>,

        /// Number of questions per quiz
        #[arg(short = 'n', long)]
        questions: Option<usize>,

        /// Random seed for reproducible generation
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Suppress progress and status output
        #[arg(short, long)]
        quiet: bool,

        /// Process files even if output exists
        #[arg(long)]
        no_skip: bool,
    },
    /// Composite an annotated image onto its original
    Blend {
        /// The unannotated original image
        #[arg(value_name = "ORIGINAL")]
        original: PathBuf,

        /// The fully annotated counterpart
        #[arg(value_name = "ANNOTATED")]
        annotated: PathBuf,

        /// Where to write the composited image
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Suppress shape and foreground reporting
        #[arg(short, long)]
        quiet: bool,
    },
    /// Equalize an image's contrast tile by tile
    Enhance {
        /// Input image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Where to write the grayscale result
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Histogram clip limit relative to the uniform level
        #[arg(long, default_value_t = DEFAULT_CLIP_LIMIT)]
        clip_limit: f64,

        /// Number of tiles per image axis
        #[arg(long, default_value_t = DEFAULT_TILE_GRID)]
        tile_grid: usize,
    },
}

/// Settings for a batch quiz run over files
#[derive(Debug, Clone)]
pub struct QuizOptions {
    /// Input text file or directory to process
    pub target: PathBuf,
    /// Number of questions per quiz
    pub questions: usize,
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Suppress progress and status output
    pub quiet: bool,
    /// Process files even if output exists
    pub no_skip: bool,
}

impl QuizOptions {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Run the selected subcommand
///
/// # Errors
///
/// Returns an error if input validation, generation or image
/// processing fails.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Quiz {
            target,
            questions,
            seed,
            quiet,
            no_skip,
        } => {
            let Some(target) = target else {
                return run_interactive(questions, seed);
            };
            let options = QuizOptions {
                target,
                questions: questions.unwrap_or(DEFAULT_QUESTION_COUNT),
                seed,
                quiet,
                no_skip,
            };
            let mut processor = FileProcessor::new(options);
            processor.process()
        }
        Command::Blend {
            original,
            annotated,
            output,
            quiet,
        } => run_blend(&original, &annotated, &output, quiet),
        Command::Enhance {
            input,
            output,
            clip_limit,
            tile_grid,
        } => run_enhance(&input, &output, clip_limit, tile_grid),
    }
}

// Prompted input and stdout output, the single-paragraph flow
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn run_interactive(questions: Option<usize>, seed: u64) -> Result<()> {
    let context = prompt::read_line("Enter the paragraph: ")?;
    let count = match questions {
        Some(value) => value,
        None => {
            prompt::read_question_count("Enter the number of questions: ", DEFAULT_QUESTION_COUNT)?
        }
    };

    let mut generator = QuizGenerator::from_context(&context, QuizConfig::default(), seed)?;
    let quiz = generator.generate(count);

    for (index, question) in quiz.questions().iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", format_question(question, index + 1));
    }
    for skip in quiz.skipped() {
        eprintln!("Skipping question {}: {}", skip.slot(), skip.reason());
    }
    Ok(())
}

// Allow print for the shape and foreground report
#[allow(clippy::print_stderr)]
fn run_blend(original: &Path, annotated: &Path, output: &Path, quiet: bool) -> Result<()> {
    let original_pixels = image::load_rgb(original)?;
    let annotated_pixels = image::load_rgb(annotated)?;
    let (blended, report) = composite::composite(&original_pixels, &annotated_pixels)?;

    if !quiet {
        let [original_height, original_width, original_channels] = report.original_shape;
        eprintln!(
            "Original Image Shape: ({original_height}, {original_width}, {original_channels})"
        );
        let [annotated_height, annotated_width, annotated_channels] = report.annotated_shape;
        eprintln!(
            "Fully Annotated Image Shape: ({annotated_height}, {annotated_width}, {annotated_channels})"
        );
        eprintln!("Rate of Foreground (ROF): {}", report.rate_of_foreground);
        eprintln!("Pasted half: {}", report.pasted_half.label());
    }

    image::save_rgb(&blended, output)
}

fn run_enhance(input: &Path, output: &Path, clip_limit: f64, tile_grid: usize) -> Result<()> {
    let pixels = image::load_rgb(input)?;
    let gray = enhance::grayscale(&pixels);
    let equalized = enhance::equalize_adaptive(&gray, clip_limit, tile_grid)?;
    image::save_gray(&equalized, output)
}

/// Orchestrates batch quiz generation over text files with progress
/// tracking
pub struct FileProcessor {
    options: QuizOptions,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given run settings
    pub fn new(options: QuizOptions) -> Self {
        let progress_manager = options.should_show_progress().then(ProgressManager::new);

        Self {
            options,
            progress_manager,
        }
    }

    /// Process files according to the run settings
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.options.target.is_file() {
            if self.options.target.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION) {
                if self.should_process_file(&self.options.target) {
                    Ok(vec![self.options.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::invalid_parameter(
                    "target",
                    &self.options.target.display(),
                    &"target file must be a .txt document",
                ))
            }
        } else if self.options.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.options.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::invalid_parameter(
                "target",
                &self.options.target.display(),
                &"target must be a .txt file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.options.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped inputs
            #[allow(clippy::print_stderr)]
            if !self.options.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for skipped question reporting
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, self.options.questions);
        }

        let context = std::fs::read_to_string(input_path)
            .map_err(|e| crate::io::error::file_system_error(input_path, "read", e))?;
        let mut generator =
            QuizGenerator::from_context(&context, QuizConfig::default(), self.options.seed)?;

        let mut questions = Vec::with_capacity(self.options.questions);
        let mut skipped = Vec::new();
        for number in 1..=self.options.questions {
            match generator.next_question() {
                Ok(question) => questions.push(question),
                Err(reason) => skipped.push((number, reason)),
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_question(index, number);
            }
        }

        let mut rendered = format_quiz(&questions);
        if !rendered.is_empty() {
            rendered.push('\n');
        }
        std::fs::write(&output_path, rendered)
            .map_err(|e| crate::io::error::file_system_error(&output_path, "write", e))?;

        if !self.options.quiet {
            for (number, reason) in &skipped {
                eprintln!(
                    "Skipping question {number} in {}: {reason}",
                    input_path.display()
                );
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
