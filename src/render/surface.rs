//! Display surface abstraction
//!
//! The redraw pipeline only needs to clear, submit one polyline with its axis
//! configuration, and ask for the result to be shown. `Viewport` implements
//! this for egui; tests use a recording implementation.

use nalgebra::Point2;

/// Axis configuration submitted alongside a polyline
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotConfig {
    /// Visible X range (min, max)
    pub x_limits: (f64, f64),
    /// Visible Y range (min, max)
    pub y_limits: (f64, f64),
    /// Whether one unit on X has the same on-screen length as one unit on Y
    pub equal_aspect: bool,
    /// Whether to draw the grid overlay
    pub grid: bool,
}

impl PlotConfig {
    /// The fixed `[-3, 3]` square viewport with grid
    pub const FIXED: PlotConfig = PlotConfig {
        x_limits: (-3.0, 3.0),
        y_limits: (-3.0, 3.0),
        equal_aspect: true,
        grid: true,
    };
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Something a polyline can be drawn on
pub trait DisplaySurface {
    /// Drop whatever was drawn before
    fn clear(&mut self);

    /// Submit a connected polyline in data coordinates
    fn plot(&mut self, points: &[Point2<f64>], config: &PlotConfig);

    /// Make the submitted drawing visible
    fn present(&mut self);
}
