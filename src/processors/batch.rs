// ibconv/src/processors/batch.rs
use crate::core::{ConvertConfig, ConvertError, ImageProcessor, Result};
use crate::utils::{is_supported_format, mirrored_output_path};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Result of handling one eligible file.
#[derive(Debug)]
pub enum TaskOutcome {
    Converted { source: PathBuf, dest: PathBuf },
    Skipped { source: PathBuf, reason: ConvertError },
    Failed { source: PathBuf, reason: ConvertError },
}

#[derive(Debug, Default)]
pub struct ConversionStats {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ConversionStats {
    fn record(&mut self, outcome: &TaskOutcome) {
        match outcome {
            TaskOutcome::Converted { .. } => self.converted += 1,
            TaskOutcome::Skipped { .. } => self.skipped += 1,
            TaskOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Walks the input tree and converts every eligible file into the mirrored
/// location under the output folder, one file at a time.
pub struct BatchProcessor {
    config: ConvertConfig,
    processor: ImageProcessor,
}

impl BatchProcessor {
    pub fn new(config: ConvertConfig) -> Self {
        let processor = ImageProcessor::new(&config);
        Self { config, processor }
    }

    /// Runs the whole conversion. Fatal errors end the run; recoverable ones
    /// are logged against the file they concern and counted.
    pub fn run(&self) -> Result<ConversionStats> {
        let input_dir = &self.config.input_dir;
        let output_dir = &self.config.output_dir;

        self.validate_paths(input_dir)?;

        std::fs::create_dir_all(output_dir).map_err(|source| ConvertError::OutputCreate {
            path: output_dir.clone(),
            source,
        })?;

        if self.config.verbose {
            println!("Scanning folder: {}", input_dir.display());
        }

        let mut stats = ConversionStats::default();

        let walker = WalkDir::new(input_dir)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            if !is_candidate(&entry) || !is_supported_format(entry.path()) {
                continue;
            }

            let outcome = self.convert_entry(entry.path())?;
            self.report(&outcome);
            stats.record(&outcome);
        }

        log::debug!(
            "Converted {} files ({} skipped, {} failed)",
            stats.converted,
            stats.skipped,
            stats.failed
        );
        println!("Conversion complete.");

        Ok(stats)
    }

    fn convert_entry(&self, source: &Path) -> Result<TaskOutcome> {
        let reason = match self.try_convert(source) {
            Ok(dest) => {
                return Ok(TaskOutcome::Converted {
                    source: source.to_path_buf(),
                    dest,
                })
            }
            Err(reason) if reason.is_fatal() => return Err(reason),
            Err(reason) => reason,
        };

        let source = source.to_path_buf();
        Ok(match reason {
            ConvertError::RelativePath(_) | ConvertError::SubdirCreate { .. } => {
                TaskOutcome::Skipped { source, reason }
            }
            _ => TaskOutcome::Failed { source, reason },
        })
    }

    fn try_convert(&self, source: &Path) -> Result<PathBuf> {
        let dest = mirrored_output_path(
            source,
            &self.config.input_dir,
            &self.config.output_dir,
            self.config.format,
        )?;

        if let Some(parent) = dest.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                return Err(ConvertError::SubdirCreate {
                    path: dest,
                    source: e,
                });
            }
        }

        self.processor.process(source, &dest)?;
        Ok(dest)
    }

    fn report(&self, outcome: &TaskOutcome) {
        match outcome {
            TaskOutcome::Converted { source, dest } => {
                log::debug!("Converted {}", source.display());
                if self.config.verbose {
                    println!("Converted: {} -> {}", source.display(), dest.display());
                }
            }
            TaskOutcome::Skipped { reason, .. } => {
                log::warn!("Warning: {}", reason);
            }
            TaskOutcome::Failed { source, reason } => {
                log::warn!("Warning: Failed to process {}: {}", source.display(), reason);
            }
        }
    }

    pub fn validate_paths(&self, input_dir: &Path) -> Result<()> {
        let metadata = match std::fs::metadata(input_dir) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConvertError::InputNotFound(input_dir.to_path_buf()));
            }
            Err(source) => {
                return Err(ConvertError::InputStat {
                    path: input_dir.to_path_buf(),
                    source,
                });
            }
        };

        if !metadata.is_dir() {
            return Err(ConvertError::InputNotADirectory(input_dir.to_path_buf()));
        }

        Ok(())
    }
}

// Symlinks are not descended into, but a link is handed to the processor
// unless it resolves to a directory. A dangling link fails at open time.
fn is_candidate(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        return !std::fs::metadata(entry.path()).is_ok_and(|m| m.is_dir());
    }
    entry.file_type().is_file()
}
