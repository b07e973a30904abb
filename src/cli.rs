// ibconv/src/cli.rs
use crate::core::{
    ConvertConfig, Result, DEFAULT_FORMAT, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_RESOLUTION,
};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Converts all images (jpg, jpeg, png, gif) found under the input folder,
resizes them to exactly W x H pixels and writes them to the same relative
location under the output folder in the chosen format.

Default behavior (no arguments):
  Converts images from ./source to ./sink at 280x180 resolution in 'jpg' format.";

/// Release shown in the banner, without the patch level.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

#[derive(Parser, Debug)]
#[command(
    name = "ibconv",
    version,
    about = "A simple bulk image converter.",
    after_long_help = AFTER_HELP,
    disable_help_flag = true
)]
pub struct Cli {
    /// Path to the input source folder
    #[arg(short = 'i', long = "input", value_name = "FOLDER", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path to the output sink folder
    #[arg(short = 'o', long = "output", value_name = "FOLDER", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Target resolution (Width,Height) to resize images to, e.g. "800,600"
    #[arg(
        short = 'r',
        long = "resolution",
        value_name = "W,H",
        default_value = DEFAULT_RESOLUTION,
        allow_hyphen_values = true
    )]
    pub resolution: String,

    /// Target output format: 'jpg' or 'png'
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Enable verbose output, showing processing details
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Print this help and usage message
    #[arg(short = 'h', long = "help")]
    pub help: bool,
}

impl Cli {
    /// Validates resolution and format and builds the run configuration.
    pub fn into_config(self) -> Result<ConvertConfig> {
        Ok(
            ConvertConfig::new(self.input, self.output, &self.resolution, &self.format)?
                .with_verbose(self.verbose)
                .with_help(self.help),
        )
    }
}

pub fn print_banner() {
    println!();
    println!("[ ibconv v{} ]", VERSION);
    println!("Author: {}", env!("CARGO_PKG_AUTHORS"));
    println!("LICENSE: {}", env!("CARGO_PKG_LICENSE"));
    println!();
}

pub fn print_help() -> std::io::Result<()> {
    Cli::command().print_long_help()
}
