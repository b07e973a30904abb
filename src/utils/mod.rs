// ibconv/src/utils/mod.rs
use crate::core::{ConvertError, ResolutionError, Result, TargetFormat};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Extensions (lowercase, no dot) picked up by the directory walk.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Parses a `"W,H"` resolution string into a positive width and height.
pub fn parse_resolution(value: &str) -> std::result::Result<(u32, u32), ResolutionError> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 2 {
        return Err(ResolutionError::InvalidFormat(value.to_string()));
    }

    let width = parse_dimension(parts[0])?;
    let height = parse_dimension(parts[1])?;

    if width <= 0 || height <= 0 {
        return Err(ResolutionError::NonPositiveDimension(width, height));
    }

    Ok((to_pixels(parts[0], width)?, to_pixels(parts[1], height)?))
}

fn parse_dimension(field: &str) -> std::result::Result<i64, ResolutionError> {
    field.parse::<i64>().map_err(|e| ResolutionError::InvalidNumber {
        value: field.to_string(),
        reason: e.to_string(),
    })
}

fn to_pixels(field: &str, value: i64) -> std::result::Result<u32, ResolutionError> {
    u32::try_from(value).map_err(|e| ResolutionError::InvalidNumber {
        value: field.to_string(),
        reason: e.to_string(),
    })
}

// Splits a file name at its last dot. Unlike `Path::extension`, a bare
// `.jpg` yields an empty stem and `jpg`.
fn split_file_name(path: &Path) -> Option<(&str, &str)> {
    let name = path.file_name()?.to_str()?;
    let dot = name.rfind('.')?;
    Some((&name[..dot], &name[dot + 1..]))
}

pub fn is_supported_format(path: &Path) -> bool {
    split_file_name(path)
        .map(|(_, ext)| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Destination for `source` under `output_dir`, keeping its path relative to
/// `input_dir` and swapping the last extension for the target format.
pub fn mirrored_output_path(
    source: &Path,
    input_dir: &Path,
    output_dir: &Path,
    format: TargetFormat,
) -> Result<PathBuf> {
    let relative = source
        .strip_prefix(input_dir)
        .map_err(|_| ConvertError::RelativePath(source.to_path_buf()))?;

    if relative.file_name().is_none() {
        return Err(ConvertError::RelativePath(source.to_path_buf()));
    }

    let renamed = match split_file_name(relative) {
        Some((stem, _)) => relative.with_file_name(format!("{}.{}", stem, format.extension())),
        None => relative.with_extension(format.extension()),
    };

    Ok(output_dir.join(renamed))
}

pub fn image_format_to_string(format: Option<ImageFormat>) -> String {
    match format {
        Some(ImageFormat::Jpeg) => "JPEG",
        Some(ImageFormat::Png) => "PNG",
        Some(ImageFormat::Gif) => "GIF",
        Some(_) => "unsupported",
        None => "unknown",
    }
    .to_string()
}
