use log::{debug, info, warn};

use crate::color::Color;
use crate::config::CanvasConfig;
use crate::grid::{Grid, GridError};
use crate::tool::{self, Tool};

/// Notifications for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasEvent {
    /// The eyedropper picked up a color, which is now the active color.
    ColorPicked(Color),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Stroke {
    anchor: Option<(u32, u32)>,
    drawing: bool,
}

/// The editable pixel canvas: grid contents plus tool state.
#[derive(Clone, Debug)]
pub struct Canvas {
    grid: Grid,
    tool: Tool,
    color: Color,
    background: Color,
    stroke: Stroke,
    grid_lines_visible: bool,
}

impl Canvas {
    pub fn new(size: u32) -> Result<Self, GridError> {
        Self::with_config(&CanvasConfig {
            grid_size: size,
            ..CanvasConfig::default()
        })
    }

    pub fn with_config(config: &CanvasConfig) -> Result<Self, GridError> {
        info!(
            "Creating {0}x{0} canvas with background {1}",
            config.grid_size, config.background
        );
        Ok(Self {
            grid: Grid::new(config.grid_size, config.background)?,
            tool: Tool::default(),
            color: config.initial_color,
            background: config.background,
            stroke: Stroke::default(),
            grid_lines_visible: config.grid_lines_visible,
        })
    }

    pub fn size(&self) -> u32 {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Color, GridError> {
        self.grid.get_pixel(x, y)
    }

    /// Flat RGBA buffer, row-major, for drawing the canvas in one pass.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.grid.to_rgba()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn grid_lines_visible(&self) -> bool {
        self.grid_lines_visible
    }

    pub fn set_grid_lines_visible(&mut self, visible: bool) {
        self.grid_lines_visible = visible;
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.drawing
    }

    pub fn anchor(&self) -> Option<(u32, u32)> {
        self.stroke.anchor
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!("Tool: {}", tool);
        self.tool = tool;
        self.stroke = Stroke::default();
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn pointer_down(&mut self, x: u32, y: u32) -> Option<CanvasEvent> {
        let Ok(current) = self.grid.get_pixel(x, y) else {
            warn!("Ignoring pointer down outside the grid at ({}, {})", x, y);
            return None;
        };

        match self.tool {
            Tool::Pen | Tool::Eraser => {
                self.paint(x, y);
                self.stroke.drawing = true;
            }
            Tool::Eyedropper => {
                debug!("Picked {} at ({}, {})", current, x, y);
                self.color = current;
                return Some(CanvasEvent::ColorPicked(current));
            }
            Tool::Fill => {
                tool::flood_fill(&mut self.grid, x, y, self.color);
            }
            Tool::Rectangle | Tool::Circle => {
                self.stroke.anchor = Some((x, y));
            }
        }
        None
    }

    pub fn pointer_move(&mut self, x: u32, y: u32) {
        if self.stroke.drawing && self.tool.is_continuous() {
            self.paint(x, y);
        }
    }

    pub fn pointer_up(&mut self, x: u32, y: u32) {
        let stroke = std::mem::take(&mut self.stroke);

        let Some((ax, ay)) = stroke.anchor else {
            return;
        };
        if self.grid.get_pixel(x, y).is_err() {
            warn!("Dropping shape released outside the grid at ({}, {})", x, y);
            return;
        }

        let anchor = (ax as i64, ay as i64);
        let release = (x as i64, y as i64);
        let painted = match self.tool {
            Tool::Rectangle => tool::draw_rectangle(&mut self.grid, anchor, release, self.color),
            Tool::Circle => tool::draw_circle(&mut self.grid, anchor, release, self.color),
            _ => 0,
        };
        debug!("{} painted {} cells", self.tool, painted);
    }

    /// Resamples the grid to `new_size`, nearest neighbour.
    pub fn resize(&mut self, new_size: u32) -> Result<(), GridError> {
        self.grid = self.grid.resampled(new_size)?;
        self.stroke = Stroke::default();
        info!("Canvas resized to {0}x{0}", new_size);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.grid.fill(self.background);
        info!("Canvas cleared");
    }

    /// Grid contents as rows, indexed `[y][x]`.
    pub fn export_data(&self) -> Vec<Vec<Color>> {
        self.grid.rows()
    }

    /// Replaces the grid with `rows` exactly; see [`Grid::from_rows`].
    pub fn import_data(&mut self, rows: &[Vec<Color>]) -> Result<(), GridError> {
        self.grid = Grid::from_rows(rows, self.background)?;
        self.stroke = Stroke::default();
        info!("Imported {0}x{0} grid", self.grid.size());
        Ok(())
    }

    fn paint(&mut self, x: u32, y: u32) {
        let color = match self.tool {
            Tool::Eraser => self.background,
            _ => self.color,
        };
        if let Err(e) = self.grid.set_pixel(x, y, color) {
            warn!("{}", e);
        }
    }
}
