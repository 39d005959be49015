//! Drawing tools and the algorithms behind them.
//!
//! Shapes are clipped to the grid; coordinates may lie outside it.

use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::color::Color;
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
    Fill,
    Rectangle,
    Circle,
    Eyedropper,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Pen,
        Tool::Eraser,
        Tool::Fill,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Eyedropper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Eyedropper => "Eyedropper",
        }
    }

    /// Tools that paint continuously while the pointer is dragged.
    pub fn is_continuous(self) -> bool {
        matches!(self, Tool::Pen | Tool::Eraser)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown tool: {0:?}")]
pub struct UnknownTool(pub String);

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("rect") {
            return Ok(Tool::Rectangle);
        }
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// 4-connected flood fill from `(x, y)`.
///
/// Does nothing if the seed already has `color`. Returns the number of
/// cells painted.
pub fn flood_fill(grid: &mut Grid, x: u32, y: u32, color: Color) -> usize {
    let Ok(target) = grid.get_pixel(x, y) else {
        return 0;
    };
    if target == color {
        return 0;
    }

    let mut painted = 0;
    let mut stack = vec![(x as i64, y as i64)];
    while let Some((cx, cy)) = stack.pop() {
        if !grid.contains(cx, cy) {
            continue;
        }
        let (ux, uy) = (cx as u32, cy as u32);
        if grid.get_pixel(ux, uy) != Ok(target) {
            continue;
        }
        if grid.set_pixel(ux, uy, color).is_ok() {
            painted += 1;
        }
        stack.extend([(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)]);
    }

    debug!("Flood fill from ({}, {}) painted {} cells", x, y, painted);
    painted
}

/// Paints the inclusive box spanned by two corners.
pub fn draw_rectangle(grid: &mut Grid, from: (i64, i64), to: (i64, i64), color: Color) -> usize {
    let (x1, x2) = (from.0.min(to.0), from.0.max(to.0));
    let (y1, y2) = (from.1.min(to.1), from.1.max(to.1));

    paint_clipped(grid, (x1, y1), (x2, y2), color, |_, _| true)
}

/// Paints every cell within Euclidean distance `max(|dx|, |dy|)` of
/// `center`, where `dx`/`dy` run from `center` to `edge`.
pub fn draw_circle(grid: &mut Grid, center: (i64, i64), edge: (i64, i64), color: Color) -> usize {
    let radius = edge.0.abs_diff(center.0).max(edge.1.abs_diff(center.1));
    let radius_sq = radius as u128 * radius as u128;

    paint_clipped(
        grid,
        (
            center.0.saturating_sub_unsigned(radius),
            center.1.saturating_sub_unsigned(radius),
        ),
        (
            center.0.saturating_add_unsigned(radius),
            center.1.saturating_add_unsigned(radius),
        ),
        color,
        |x, y| {
            let dx = x.abs_diff(center.0) as u128;
            let dy = y.abs_diff(center.1) as u128;
            (dx * dx).saturating_add(dy * dy) <= radius_sq
        },
    )
}

fn paint_clipped(
    grid: &mut Grid,
    min: (i64, i64),
    max: (i64, i64),
    color: Color,
    inside: impl Fn(i64, i64) -> bool,
) -> usize {
    let last = grid.size() as i64 - 1;
    let (x1, y1) = (min.0.max(0), min.1.max(0));
    let (x2, y2) = (max.0.min(last), max.1.min(last));

    let mut painted = 0;
    for y in y1..=y2 {
        for x in x1..=x2 {
            if inside(x, y) && grid.set_pixel(x as u32, y as u32, color).is_ok() {
                painted += 1;
            }
        }
    }
    painted
}
