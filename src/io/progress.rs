//! Multi-file stage tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Processing stages of one input file, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and parsing tile blocks
    Parse,
    /// Census check and placement search
    Assemble,
    /// Composite merge and pattern erasure
    Roughness,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Self; 3] = [Self::Parse, Self::Assemble, Self::Roughness];

    /// Short label used in progress and timing output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Assemble => "assemble",
            Self::Roughness => "roughness",
        }
    }

    /// One-based position of the stage
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Parse => 1,
            Self::Assemble => 2,
            Self::Roughness => 3,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default)]
struct FileState {
    name: String,
    completed: usize,
    status: String,
}

/// Coordinates progress display for batch operations
///
/// Automatically switches between individual progress bars (for small batches)
/// and an additional batch progress bar (for large batches) based on file count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    file_states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(Stage::ALL.len() as u64);
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files announced by [`ProgressManager::initialize`]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Configure progress bar for a new file
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if let Some(state) = self.state_mut(index) {
            *state = FileState {
                name: display_name,
                completed: 0,
                status: Stage::Parse.label().to_string(),
            };
        }
        self.update_bars();
    }

    /// Report that a stage finished
    pub fn complete_stage(&mut self, index: usize, stage: Stage, _elapsed: Duration) {
        if let Some(state) = self.state_mut(index) {
            state.completed = stage.ordinal();
            state.status = Stage::ALL
                .get(stage.ordinal())
                .map_or("done", |next| next.label())
                .to_string();
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, _elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.state_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.completed = Stage::ALL.len();
            state.status = "done".to_string();
        }
        self.update_bars();
    }

    /// Mark file as failed, leaving its bar where it stopped
    pub fn fail_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.state_mut(index) {
            state.name = format!("✗ {}", state.name);
            state.status = "failed".to_string();
        }
        self.update_bars();
    }

    /// Run `f` with the bars hidden, so terminal output does not tear them
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.multi_progress.suspend(f)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn state_mut(&mut self, index: usize) -> Option<&mut FileState> {
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileState::default());
        }
        self.file_states.get_mut(index)
    }

    /// Update all progress bars to show the last N active files
    fn update_bars(&self) {
        let active_files: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, state) in visible_files.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(state.completed as u64);
                bar.set_message(state.status.clone());
                bar.set_prefix(state.name.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible_files.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
