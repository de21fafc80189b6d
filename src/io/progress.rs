//! Rolling progress display for multi-file quiz runs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Terminal progress for a batch of quiz files
///
/// Small runs get one bar per file. Larger runs add an overall counter
/// and recycle a fixed set of lanes over the newest files
#[derive(Default)]
pub struct ProgressManager {
    multi_progress: MultiProgress,
    overall: Option<ProgressBar>,
    lanes: Vec<ProgressBar>,
    /// One slot per started file, in start order
    files: Vec<FileState>,
}

#[derive(Default)]
struct FileState {
    label: String,
    answered: usize,
    planned: usize,
}

static LANE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:28.green/white}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static OVERALL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let width = PROGRESS_BAR_WIDTH;
    ProgressStyle::default_bar()
        .template(&format!(
            "{{pos}}/{{len}} files [{{bar:{width}.green/white}}] {{elapsed}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create an empty progress manager with no bars yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out bars for a run over `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        // Runs too large for the lane window also get an overall counter
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let overall = ProgressBar::new(file_count as u64);
            overall.set_style(OVERALL_STYLE.clone());
            self.overall = Some(self.multi_progress.add(overall));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let lane = ProgressBar::new(0);
            lane.set_style(LANE_STYLE.clone());
            self.lanes.push(self.multi_progress.add(lane));
        }
    }

    /// Register a file and the number of questions it will produce
    pub fn start_file(&mut self, index: usize, path: &Path, questions: usize) {
        let label = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        if self.files.len() <= index {
            self.files.resize_with(index + 1, FileState::default);
        }
        if let Some(slot) = self.files.get_mut(index) {
            *slot = FileState {
                label,
                answered: 0,
                planned: questions,
            };
        }
        self.redraw();
    }

    /// Record the latest answered question for a file
    pub fn update_question(&mut self, file_index: usize, question: usize) {
        if let Some(slot) = self.files.get_mut(file_index) {
            slot.answered = question;
        }
        self.redraw();
    }

    /// Mark a file as done and advance the overall counter
    pub fn complete_file(&mut self, index: usize) {
        if let Some(overall) = &self.overall {
            overall.inc(1);
        }
        if let Some(slot) = self.files.get_mut(index) {
            slot.answered = slot.planned;
            slot.label.insert_str(0, "✓ ");
        }
        self.redraw();
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(overall) = &self.overall {
            overall.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    /// Point the lanes at the newest started files
    fn redraw(&self) {
        let labeled: Vec<&FileState> = self
            .files
            .iter()
            .filter(|state| !state.label.is_empty())
            .collect();
        let skip = labeled.len().saturating_sub(self.lanes.len());
        let window = labeled.get(skip..).unwrap_or(&[]);

        for (lane, state) in self.lanes.iter().zip(window) {
            let planned = state.planned;
            let answered = state.answered;
            lane.set_length(planned as u64);
            lane.set_position(answered as u64);
            let width = planned.to_string().len();
            lane.set_message(format!("{answered:>width$}/{planned}"));
            lane.set_prefix(state.label.clone());
        }

        // Lanes past the window keep stale text otherwise
        for lane in self.lanes.iter().skip(window.len()) {
            lane.set_length(0);
            lane.set_position(0);
            lane.set_message(String::new());
            lane.set_prefix(String::new());
        }
    }
}
