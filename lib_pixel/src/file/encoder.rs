use log::{debug, info};
use thiserror::Error;

use super::format::GridFile;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Failed to serialize grid")]
    SerializationFailed(#[from] serde_json::Error),
}

pub fn encode(file: &GridFile) -> Result<Vec<u8>, EncodeError> {
    info!("Starting encoding");
    debug!(
        "Grid: stated size {:?}, {} rows",
        file.grid_size,
        file.colors.len()
    );

    let encoded_data = serde_json::to_vec_pretty(file)?;

    info!("Encoding completed: {} bytes", encoded_data.len());
    Ok(encoded_data)
}
