// ibconv/src/core/mod.rs
pub mod processor;

use crate::utils::parse_resolution;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub use processor::ImageProcessor;

pub const DEFAULT_INPUT: &str = "./source";
pub const DEFAULT_OUTPUT: &str = "./sink";
pub const DEFAULT_RESOLUTION: &str = "280,180";
pub const DEFAULT_FORMAT: &str = "jpg";

/// Quality used for every JPEG written.
pub const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Jpg,
    Png,
}

impl TargetFormat {
    /// Extension appended to converted files, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Jpg => "jpg",
            TargetFormat::Png => "png",
        }
    }
}

impl FromStr for TargetFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jpg" => Ok(TargetFormat::Jpg),
            "png" => Ok(TargetFormat::Png),
            _ => Err(ConvertError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Resolved settings for one conversion run. Not modified after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub format: TargetFormat,
    pub width: u32,
    pub height: u32,
    pub verbose: bool,
    pub help: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT),
            format: TargetFormat::Jpg,
            width: 280,
            height: 180,
            verbose: false,
            help: false,
        }
    }
}

impl ConvertConfig {
    /// Builds a config from raw flag values, validating resolution and format.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        resolution: &str,
        format: &str,
    ) -> Result<Self> {
        let (width, height) = parse_resolution(resolution)?;
        let format = format.parse::<TargetFormat>()?;

        Ok(Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            format,
            width,
            height,
            ..Default::default()
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    pub fn print_summary(&self) {
        println!("Starting ibconv...");
        println!("Input Folder: {}", self.input_dir.display());
        println!("Output Folder: {}", self.output_dir.display());
        println!("Target Size: {}x{}", self.width, self.height);
        println!("Target Format: {}", self.format);
    }
}

/// Whether an error ends the run or only skips the file it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Recoverable,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("invalid format, expected 'W,H' but got '{0}'")]
    InvalidFormat(String),

    #[error("invalid number '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    #[error("width and height must be positive, got {0}x{1}")]
    NonPositiveDimension(i64, i64),
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid resolution format. Must be W,H: {0}")]
    InvalidResolution(#[from] ResolutionError),

    #[error("Invalid format '{0}'. Must be 'jpg' or 'png'")]
    UnsupportedFormat(String),

    #[error("Input folder '{0}' does not exist")]
    InputNotFound(PathBuf),

    #[error("Input path '{0}' is a file, not a folder")]
    InputNotADirectory(PathBuf),

    #[error("Error checking input folder '{path}': {source}")]
    InputStat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error walking directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Could not get relative path for {0}")]
    RelativePath(PathBuf),

    #[error("Could not create sub-directory for {path}: {source}")]
    SubdirCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not open file: {0}")]
    Open(std::io::Error),

    #[error("could not decode image (format {format}): {source}")]
    Decode {
        format: String,
        source: image::ImageError,
    },

    #[error("could not create output file: {0}")]
    Create(std::io::Error),

    #[error("could not encode image: {0}")]
    Encode(#[from] image::ImageError),
}

impl ConvertError {
    pub fn severity(&self) -> Severity {
        match self {
            ConvertError::InvalidResolution(_)
            | ConvertError::UnsupportedFormat(_)
            | ConvertError::InputNotFound(_)
            | ConvertError::InputNotADirectory(_)
            | ConvertError::InputStat { .. }
            | ConvertError::OutputCreate { .. }
            | ConvertError::Walk(_) => Severity::Fatal,
            ConvertError::RelativePath(_)
            | ConvertError::SubdirCreate { .. }
            | ConvertError::Open(_)
            | ConvertError::Decode { .. }
            | ConvertError::Create(_)
            | ConvertError::Encode(_) => Severity::Recoverable,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
