//! Render module - drawing surfaces for the transformed polygon
//!
//! This module provides:
//! - `DisplaySurface` trait used by the redraw pipeline
//! - `Viewport`, the egui widget implementing it

mod surface;
mod viewport;

pub use surface::{DisplaySurface, PlotConfig};
pub use viewport::{ColorPreset, Viewport};
