//! Polygon viewport widget
//!
//! Retains the last polyline submitted through `DisplaySurface` and paints it
//! every frame inside a fixed data window.
//!
//! ## Coordinate System
//!
//! Data coordinates follow the usual math convention:
//! - X increases to the right
//! - Y increases upward (screen Y is flipped)
//!
//! With `equal_aspect` the data window is fitted into the largest centered
//! rectangle that keeps one X unit as long as one Y unit.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use nalgebra::Point2;

use super::surface::{DisplaySurface, PlotConfig};

/// Display settings for the viewport
#[derive(Clone)]
pub struct ViewportSettings {
    /// Polygon line color
    pub color: Color32,

    /// Background color
    pub background: Color32,

    /// Line thickness in pixels
    pub line_width: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(70, 130, 255),
            background: Color32::from_rgb(20, 20, 24),
            line_width: 2.0,
        }
    }
}

/// Named color schemes offered in the Display section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPreset {
    Blue,
    Green,
    Amber,
    Paper,
}

impl ColorPreset {
    pub const ALL: &[ColorPreset] = &[Self::Blue, Self::Green, Self::Amber, Self::Paper];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Amber => "Amber",
            Self::Paper => "Paper",
        }
    }

    /// (line color, background)
    fn colors(&self) -> (Color32, Color32) {
        match self {
            Self::Blue => (Color32::from_rgb(70, 130, 255), Color32::from_rgb(20, 20, 24)),
            Self::Green => (Color32::from_rgb(100, 255, 100), Color32::from_rgb(10, 20, 10)),
            Self::Amber => (Color32::from_rgb(255, 176, 0), Color32::from_rgb(20, 15, 5)),
            Self::Paper => (Color32::from_rgb(30, 60, 200), Color32::from_rgb(245, 245, 240)),
        }
    }

    /// Set both the line and background colors
    pub fn apply(&self, settings: &mut ViewportSettings) {
        let (color, background) = self.colors();
        settings.color = color;
        settings.background = background;
    }
}

/// 2D plot widget showing a single closed polyline
pub struct Viewport {
    /// Display settings
    pub settings: ViewportSettings,

    /// Polyline last submitted by `plot`, in data coordinates
    trace: Vec<Point2<f64>>,

    /// Axis configuration submitted with the trace
    config: PlotConfig,

    /// Used by `present` to schedule a repaint; absent outside a running app
    ctx: Option<egui::Context>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a viewport that is not attached to an egui context
    pub fn new() -> Self {
        Self {
            settings: ViewportSettings::default(),
            trace: Vec::new(),
            config: PlotConfig::default(),
            ctx: None,
        }
    }

    /// Create a viewport that requests repaints from `ctx` when presented
    pub fn attached(ctx: egui::Context) -> Self {
        Self {
            ctx: Some(ctx),
            ..Self::new()
        }
    }

    /// The polyline currently held for painting
    pub fn trace(&self) -> &[Point2<f64>] {
        &self.trace
    }

    /// Draw the viewport
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    ///
    /// # Returns
    /// The response from the widget
    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let available = ui.available_size();
        let side = available.x.min(available.y).max(1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::hover());
        let plot = plot_rect(response.rect, &self.config);

        painter.rect_filled(response.rect, 4.0, self.settings.background);

        if self.config.grid {
            self.draw_grid(&painter, plot);
        }

        self.draw_trace(&painter.with_clip_rect(plot), plot);

        response
    }

    /// Draw grid lines at every whole unit, with the axes emphasized
    fn draw_grid(&self, painter: &egui::Painter, plot: Rect) {
        let grid_color = Color32::from_rgba_unmultiplied(120, 120, 130, 60);
        let axis_color = Color32::from_rgba_unmultiplied(170, 170, 180, 140);
        let label_color = Color32::from_gray(150);

        let stroke_grid = Stroke::new(0.5, grid_color);
        let stroke_axis = Stroke::new(1.0, axis_color);
        let font = FontId::proportional(10.0);

        let (x_min, x_max) = self.config.x_limits;
        let (y_min, y_max) = self.config.y_limits;

        for x in whole_units(x_min, x_max) {
            let top = data_to_screen(Point2::new(x, y_max), plot, &self.config);
            let bottom = data_to_screen(Point2::new(x, y_min), plot, &self.config);
            let stroke = if x == 0.0 { stroke_axis } else { stroke_grid };
            painter.line_segment([top, bottom], stroke);
            painter.text(bottom, Align2::CENTER_BOTTOM, format!("{x}"), font.clone(), label_color);
        }

        for y in whole_units(y_min, y_max) {
            let left = data_to_screen(Point2::new(x_min, y), plot, &self.config);
            let right = data_to_screen(Point2::new(x_max, y), plot, &self.config);
            let stroke = if y == 0.0 { stroke_axis } else { stroke_grid };
            painter.line_segment([left, right], stroke);
            painter.text(left, Align2::LEFT_CENTER, format!("{y}"), font.clone(), label_color);
        }
    }

    /// Draw the retained polyline
    fn draw_trace(&self, painter: &egui::Painter, plot: Rect) {
        if self.trace.is_empty() {
            return;
        }

        let points: Vec<Pos2> = self
            .trace
            .iter()
            .map(|p| data_to_screen(*p, plot, &self.config))
            .collect();

        let stroke = Stroke::new(self.settings.line_width, self.settings.color);

        // A zero scale collapses every vertex onto one point
        if points.windows(2).all(|w| w[0] == w[1]) {
            painter.circle_filled(points[0], self.settings.line_width, self.settings.color);
        } else {
            painter.add(egui::Shape::line(points, stroke));
        }
    }
}

impl DisplaySurface for Viewport {
    fn clear(&mut self) {
        self.trace.clear();
    }

    fn plot(&mut self, points: &[Point2<f64>], config: &PlotConfig) {
        self.trace.extend_from_slice(points);
        self.config = *config;
    }

    fn present(&mut self) {
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

/// Integer positions within `[min, max]`
fn whole_units(min: f64, max: f64) -> impl Iterator<Item = f64> {
    let first = min.ceil() as i64;
    let last = max.floor() as i64;
    (first..=last).map(|v| v as f64)
}

/// Region of `rect` that the data window maps onto
///
/// Without `equal_aspect` this is `rect` itself.
fn plot_rect(rect: Rect, config: &PlotConfig) -> Rect {
    if !config.equal_aspect {
        return rect;
    }

    let x_span = (config.x_limits.1 - config.x_limits.0) as f32;
    let y_span = (config.y_limits.1 - config.y_limits.0) as f32;
    let pixels_per_unit = (rect.width() / x_span).min(rect.height() / y_span);

    Rect::from_center_size(
        rect.center(),
        Vec2::new(x_span * pixels_per_unit, y_span * pixels_per_unit),
    )
}

/// Convert a data point to screen coordinates inside `plot`
fn data_to_screen(p: Point2<f64>, plot: Rect, config: &PlotConfig) -> Pos2 {
    let (x_min, x_max) = config.x_limits;
    let (y_min, y_max) = config.y_limits;

    let norm_x = ((p.x - x_min) / (x_max - x_min)) as f32;
    let norm_y = ((p.y - y_min) / (y_max - y_min)) as f32;

    Pos2::new(
        plot.left() + norm_x * plot.width(),
        plot.bottom() - norm_y * plot.height(), // Flip Y
    )
}
