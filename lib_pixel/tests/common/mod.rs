#![allow(dead_code)]

use std::path::PathBuf;

use lib_pixel::{Canvas, Color};

pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// Canvas whose cell (x, y) holds rgb(x, y, 0).
pub fn numbered_canvas(size: u32) -> Canvas {
    let mut canvas = Canvas::new(size).unwrap();
    let rows: Vec<Vec<Color>> = (0..size)
        .map(|y| (0..size).map(|x| Color::rgb(x as u8, y as u8, 0)).collect())
        .collect();
    canvas.import_data(&rows).unwrap();
    canvas
}

/// Cells holding `color`, in row-major order.
pub fn cells_with(canvas: &Canvas, color: Color) -> Vec<(u32, u32)> {
    let size = canvas.size();
    (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.pixel(x, y).unwrap() == color)
        .collect()
}

pub fn assert_well_formed(canvas: &Canvas) {
    let size = canvas.size() as usize;
    assert!(size > 0);
    assert_eq!(canvas.grid().cells().len(), size * size);
    let rows = canvas.export_data();
    assert_eq!(rows.len(), size);
    assert!(rows.iter().all(|row| row.len() == size));
}

pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lib_pixel_{}_{}", std::process::id(), name))
}
