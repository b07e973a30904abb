mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{print_banner, print_help, Cli, VERSION};
pub use crate::core::{
    ConvertConfig, ConvertError, ImageProcessor, ResolutionError, Result, Severity,
    TargetFormat, DEFAULT_FORMAT, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_RESOLUTION,
    JPEG_QUALITY,
};
pub use processors::{BatchProcessor, Compressor, ConversionStats, Loader, Resizer, TaskOutcome};
pub use utils::{is_supported_format, mirrored_output_path, parse_resolution, SUPPORTED_EXTENSIONS};
