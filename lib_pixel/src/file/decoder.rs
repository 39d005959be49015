use log::{debug, error, info, warn};
use serde::Deserialize;
use thiserror::Error;

use super::format::GridFile;
use crate::color::Color;
use crate::constants::MAX_FILE_GRID_SIZE;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed grid file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Grid file has no \"colors\" field")]
    MissingColors,
    #[error("Grid file has no rows")]
    EmptyGrid,
    #[error("Grid file has {rows} rows, at most {max} are supported")]
    TooLarge { rows: usize, max: u32 },
}

#[derive(Deserialize)]
struct RawGridFile {
    // Only informational, so a bad value must not reject the file
    grid_size: Option<serde_json::Value>,
    colors: Option<Vec<Vec<Color>>>,
}

pub fn decode(encoded_data: &[u8]) -> Result<GridFile, DecodeError> {
    info!("Starting decoding of {} bytes", encoded_data.len());

    let raw: RawGridFile = serde_json::from_slice(encoded_data).map_err(|e| {
        error!("Failed to parse grid file: {}", e);
        DecodeError::Malformed(e)
    })?;

    let Some(colors) = raw.colors else {
        error!("Grid file is missing the colors field");
        return Err(DecodeError::MissingColors);
    };
    if colors.is_empty() {
        error!("Grid file has an empty colors field");
        return Err(DecodeError::EmptyGrid);
    }
    if colors.len() > MAX_FILE_GRID_SIZE as usize {
        error!(
            "Grid file has {} rows, limit is {}",
            colors.len(),
            MAX_FILE_GRID_SIZE
        );
        return Err(DecodeError::TooLarge {
            rows: colors.len(),
            max: MAX_FILE_GRID_SIZE,
        });
    }
    debug!("Read {} rows", colors.len());

    let grid_size = raw.grid_size.as_ref().and_then(|value| {
        let size = value.as_u64().and_then(|n| u32::try_from(n).ok());
        if size.is_none() {
            warn!("Ignoring unusable grid_size {}", value);
        }
        size
    });

    match grid_size {
        Some(size) if size as usize != colors.len() => warn!(
            "Stated grid_size {} does not match {} rows, using the rows",
            size,
            colors.len()
        ),
        None => debug!("No grid_size given"),
        _ => {}
    }
    if colors.iter().any(|row| row.len() != colors.len()) {
        warn!("Grid file rows are jagged, missing cells become background");
    }

    info!("Decoding completed successfully");
    Ok(GridFile {
        grid_size,
        colors,
    })
}
