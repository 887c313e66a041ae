//! Redraw pipeline
//!
//! One full recompute-and-render pass: nothing is carried between calls, so
//! every redraw reflects the current `TransformState` exactly.

use nalgebra::Point2;

use crate::geometry::{apply, combined, regular_polygon, TransformState};
use crate::render::{DisplaySurface, PlotConfig};

/// Compute the closed, transformed outline for `state`
///
/// The first point is repeated at the end so the polyline closes.
pub fn closed_outline(state: &TransformState) -> Vec<Point2<f64>> {
    let vertices = regular_polygon(state.side_count());
    let mut points = apply(&combined(state), &vertices);

    if let Some(&first) = points.first() {
        points.push(first);
    }

    points
}

/// Clear `surface`, draw the current polygon on it and present it
///
/// Returns the point sequence that was submitted.
pub fn redraw<S: DisplaySurface>(state: &TransformState, surface: &mut S) -> Vec<Point2<f64>> {
    surface.clear();

    let points = closed_outline(state);
    surface.plot(&points, &PlotConfig::FIXED);
    surface.present();

    log::debug!(
        "Redraw: {} sides, {} points submitted",
        state.side_count(),
        points.len()
    );

    points
}
