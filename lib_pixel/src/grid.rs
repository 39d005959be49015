use log::debug;
use thiserror::Error;

use crate::color::Color;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinates ({x}, {y}) are out of bounds for grid size {size}")]
    OutOfBounds { x: u32, y: u32, size: u32 },
    #[error("grid size must be at least 1, got {0}")]
    InvalidSize(usize),
}

/// Square grid of colors stored row-major.
///
/// Always holds exactly `size * size` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    cells: Vec<Color>,
}

impl Grid {
    pub fn new(size: u32, fill: Color) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize(0));
        }
        Ok(Self {
            size,
            cells: vec![fill; size as usize * size as usize],
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        let size = self.size as i64;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, GridError> {
        if x >= self.size || y >= self.size {
            return Err(GridError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y as usize * self.size as usize + x as usize)
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color, GridError> {
        let index = self.index(x, y)?;
        Ok(self.cells[index])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<usize, GridError> {
        let index = self.index(x, y)?;
        self.cells[index] = color;
        Ok(index)
    }

    pub fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }

    /// Nearest-neighbour resample into a grid of `new_size`.
    ///
    /// New cell `(x, y)` reads old cell `(x * old / new, y * old / new)`,
    /// clamped to the last old row and column.
    pub fn resampled(&self, new_size: u32) -> Result<Self, GridError> {
        if new_size == 0 {
            return Err(GridError::InvalidSize(0));
        }

        let old = self.size as u64;
        let new = new_size as u64;
        let source = |v: u32| ((v as u64 * old / new).min(old - 1)) as usize;

        let mut cells = Vec::with_capacity(new_size as usize * new_size as usize);
        for y in 0..new_size {
            let row = source(y) * self.size as usize;
            for x in 0..new_size {
                cells.push(self.cells[row + source(x)]);
            }
        }

        debug!("Resampled grid {} -> {}", self.size, new_size);
        Ok(Self {
            size: new_size,
            cells,
        })
    }

    /// Builds a grid from rows, one row per `y`.
    ///
    /// The side length is the number of rows. Cells missing from a short
    /// row take `fill`; extra columns are dropped.
    pub fn from_rows(rows: &[Vec<Color>], fill: Color) -> Result<Self, GridError> {
        let size = u32::try_from(rows.len()).map_err(|_| GridError::InvalidSize(rows.len()))?;
        let mut grid = Self::new(size, fill)?;

        for (y, row) in rows.iter().enumerate() {
            let start = y * size as usize;
            for (cell, &color) in grid.cells[start..start + size as usize]
                .iter_mut()
                .zip(row)
            {
                *cell = color;
            }
        }

        Ok(grid)
    }

    pub fn rows(&self) -> Vec<Vec<Color>> {
        self.cells
            .chunks(self.size as usize)
            .map(<[Color]>::to_vec)
            .collect()
    }

    pub fn to_rgba(&self) -> Vec<u8> {
        self.cells.iter().flat_map(|c| c.to_array()).collect()
    }
}
