//! Command-line interface for solving tile puzzle files with stage timing

use crate::algorithm::solver::{Solver, SolverConfig};
use crate::io::configuration::{IMAGE_SUFFIX, INPUT_EXTENSION};
use crate::io::error::{AssemblyError, Result, WithContext, io_error};
use crate::io::image::export_grid_as_png;
use crate::io::progress::{ProgressManager, Stage};
use crate::spatial::tiles::TileId;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "jigsaw")]
#[command(
    author,
    version,
    about = "Assemble edge-matched tiles and count cells outside pattern occurrences"
)]
/// Command-line arguments for the tile assembler
pub struct Cli {
    /// Input file, or directory of .txt input files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Print every timing on its own line, plus census and pattern details
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the marked composite next to each input as <name>_image.png
    #[arg(short, long)]
    pub export: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Answers computed for one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Input file
    pub path: PathBuf,
    /// Product of the four corner tile identifiers
    pub corner_product: u64,
    /// Active cells outside every pattern occurrence
    pub roughness: usize,
    /// Exported image, when requested
    pub image_path: Option<PathBuf>,
}

/// Format one timing line: right-aligned value and milliseconds
pub fn format_timing(value: &str, elapsed: Duration) -> String {
    format!("{value:>15} ({:>10.4}ms)", elapsed.as_secs_f64() * 1000.0)
}

/// Orchestrates processing of input files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    solver: Solver,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            solver: Solver::new(SolverConfig::default()),
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails or any file cannot be read,
    /// assembled or exported
    pub fn process(&mut self) -> Result<Vec<FileOutcome>> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut outcomes = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            match self.process_file(file, index, files.len() > 1) {
                Ok(outcome) => outcomes.push(outcome),
                Err(error) => {
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.fail_file(index);
                        pm.finish();
                    }
                    return Err(error);
                }
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(outcomes)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            Ok(vec![self.cli.target.clone()])
        } else if self.cli.target.is_dir() {
            let read_error = |e: std::io::Error| AssemblyError::FileSystem {
                path: self.cli.target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error(&format!(
                "Target '{}' must be an input file or directory",
                self.cli.target.display()
            )))
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        labelled: bool,
    ) -> Result<FileOutcome> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let text = std::fs::read_to_string(input_path).map_err(|e| AssemblyError::FileSystem {
            path: input_path.to_path_buf(),
            operation: "read input",
            source: e,
        })?;
        let tiles = self.solver.parse(&text).with_path(input_path)?;
        let parse_time = self.stage_done(index, Stage::Parse, start_time);

        let stage_start = Instant::now();
        let assembly = self.solver.assemble(&tiles).with_path(input_path)?;
        let assemble_time = self.stage_done(index, Stage::Assemble, stage_start);

        let stage_start = Instant::now();
        let report = self
            .solver
            .roughness(&assembly.placement)
            .with_path(input_path)?;
        let roughness_time = self.stage_done(index, Stage::Roughness, stage_start);

        let image_path = if self.cli.export {
            let path = Self::get_image_path(input_path);
            export_grid_as_png(report.image(), &path).with_path(input_path)?;
            Some(path)
        } else {
            None
        };

        let total_time = start_time.elapsed();
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, total_time);
        }

        let mut lines = Vec::new();
        if labelled {
            lines.push(format!("{}:", input_path.display()));
        }
        if self.cli.verbose {
            lines.push(format_timing(Stage::Parse.label(), parse_time));
            lines.push(format_timing(&assembly.corner_product.to_string(), assemble_time));
            lines.push(format_timing(&report.roughness().to_string(), roughness_time));
            lines.push(format_timing("total", total_time));
            lines.push(format!(
                "{:>15} {}",
                "corners",
                join_ids(&assembly.placement.corner_ids())
            ));
            if let Some(ref census) = assembly.census_corners {
                lines.push(format!("{:>15} {}", "census", join_ids(census)));
            }
            lines.push(match report.orientation() {
                Some(orientation) => format!(
                    "{:>15} {} occurrence(s) at {orientation}",
                    "pattern",
                    report.hits()
                ),
                None => format!("{:>15} no occurrences", "pattern"),
            });
        } else {
            lines.push(format!(
                "{}{}{}",
                format_timing(&assembly.corner_product.to_string(), assemble_time),
                format_timing(&report.roughness().to_string(), roughness_time),
                format_timing("total", total_time)
            ));
        }
        for line in &lines {
            self.emit(line);
        }

        Ok(FileOutcome {
            path: input_path.to_path_buf(),
            corner_product: assembly.corner_product,
            roughness: report.roughness(),
            image_path,
        })
    }

    fn stage_done(&mut self, index: usize, stage: Stage, started: Instant) -> Duration {
        let elapsed = started.elapsed();
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_stage(index, stage, elapsed);
        }
        elapsed
    }

    // Answers belong on stdout; bars are routed around so they do not tear
    #[allow(clippy::print_stdout)]
    fn emit(&self, line: &str) {
        match self.progress_manager {
            Some(ref pm) => pm.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }

    fn get_image_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let image_name = format!("{}{IMAGE_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(image_name)
        } else {
            PathBuf::from(image_name)
        }
    }
}

fn join_ids(ids: &[TileId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
