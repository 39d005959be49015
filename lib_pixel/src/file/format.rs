use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Color;

/// On-disk layout of a saved canvas.
///
/// `colors` is indexed `[y][x]`. `grid_size` is informational; the row
/// count of `colors` decides the real size on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<u32>,
    pub colors: Vec<Vec<Color>>,
}

impl GridFile {
    pub fn new(colors: Vec<Vec<Color>>) -> Self {
        Self {
            grid_size: u32::try_from(colors.len()).ok(),
            colors,
        }
    }

    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self {
            grid_size: Some(canvas.size()),
            colors: canvas.export_data(),
        }
    }

    /// The size to show in the size control: the stated `grid_size`, or
    /// the row count when absent.
    pub fn advisory_size(&self) -> u32 {
        self.grid_size
            .unwrap_or_else(|| u32::try_from(self.colors.len()).unwrap_or(u32::MAX))
    }
}
