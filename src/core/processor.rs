// ibconv/src/core/processor.rs
use super::{ConvertConfig, Result};
use crate::processors::{Compressor, Loader, Resizer};
use std::path::Path;

/// Converts one file: decode, resize to the configured box, encode.
pub struct ImageProcessor {
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new(config: &ConvertConfig) -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(config.width, config.height),
            compressor: Compressor::new(config.format),
        }
    }

    /// The source handle is closed before the destination is created; the
    /// destination handle is closed on every return path.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(&self, source: P, dest: Q) -> Result<()> {
        let source = source.as_ref();
        let dest = dest.as_ref();

        let image = self.loader.load(source)?;
        let resized = self.resizer.resize(&image);
        self.compressor.save(&resized, dest)?;

        Ok(())
    }
}
