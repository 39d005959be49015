pub mod decoder;
pub mod encoder;
pub mod format;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use log::{error, info};
use thiserror::Error;

pub use decoder::{decode, DecodeError};
pub use encoder::{encode, EncodeError};
pub use format::GridFile;

use crate::canvas::Canvas;
use crate::constants::{FILE_EXT, FORMAT_NAME};
use crate::grid::GridError;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid grid file: {0}")]
    InvalidFile(#[from] DecodeError),

    #[error("Failed to encode grid: {0}")]
    EncodeFailed(#[from] EncodeError),

    #[error("Grid rejected: {0}")]
    GridRejected(#[from] GridError),
}

impl FileError {
    /// Whether the file itself is bad, as opposed to the disk failing.
    pub fn is_invalid_file(&self) -> bool {
        matches!(self, FileError::InvalidFile(_) | FileError::GridRejected(_))
    }
}

impl Canvas {
    /// Replaces the canvas contents with a decoded file.
    pub fn load_file(&mut self, file: &GridFile) -> Result<(), GridError> {
        self.import_data(&file.colors)
    }
}

/// Name and extensions for a file picker filter.
pub fn picker_filter() -> (&'static str, [&'static str; 1]) {
    (FORMAT_NAME, [FILE_EXT])
}

pub fn is_grid_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXT))
}

pub fn save_canvas(path: impl AsRef<Path>, canvas: &Canvas) -> Result<(), FileError> {
    let path = path.as_ref();
    let encoded_data = encode(&GridFile::from_canvas(canvas))?;

    let mut file = File::create(path).map_err(|e| {
        error!("Can't create {}: {}", path.display(), e);
        e
    })?;
    file.write_all(&encoded_data)?;

    info!("Canvas saved to {}", path.display());
    Ok(())
}

/// Loads a grid file into `canvas`, returning the size to show in the size
/// control. The canvas is untouched on error.
pub fn load_canvas(path: impl AsRef<Path>, canvas: &mut Canvas) -> Result<u32, FileError> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|e| {
        error!("Can't open {}: {}", path.display(), e);
        e
    })?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    let grid_file = decode(&buffer)?;
    canvas.load_file(&grid_file)?;

    info!("Canvas loaded from {}", path.display());
    Ok(grid_file.advisory_size())
}
