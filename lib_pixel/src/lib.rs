pub mod canvas;
pub mod color;
pub mod config;
pub mod constants;
pub mod file;
pub mod grid;
pub mod tool;

use log::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

pub use crate::canvas::{Canvas, CanvasEvent};
pub use crate::color::Color;
pub use crate::config::CanvasConfig;
pub use crate::file::{decode, encode, load_canvas, save_canvas, GridFile};
pub use crate::grid::{Grid, GridError};
pub use crate::tool::Tool;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Can't create log file: {0}")]
    LogFile(#[from] io::Error),
    #[error("Logger already initialized")]
    AlreadyInitialized(#[from] SetLoggerError),
}

pub fn init_logging(path: impl AsRef<Path>) -> Result<(), LoggingError> {
    let target = Box::new(File::create(path)?);

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_pixel"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;

    Ok(())
}
