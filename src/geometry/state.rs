//! Transform parameters controlled by the user

use thiserror::Error;

/// Fewest sides a polygon may have
pub const MIN_SIDES: usize = 3;

/// Most sides a polygon may have
///
/// Every redraw allocates one vertex per side, so larger values are refused
/// like any other invalid input. Well above the 100-sided circle shortcut.
pub const MAX_SIDES: usize = 100_000;

/// Reasons a side-count update is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SideCountError {
    #[error("Side count is not an integer: {0:?}")]
    NotAnInteger(String),

    #[error("Polygon requires at least 3 sides, got {0}")]
    TooFewSides(i64),

    #[error("Polygon supports at most 100000 sides, got {0}")]
    TooManySides(i64),
}

/// Current polygon and transform parameters
///
/// One instance lives for the whole session and is mutated in place.
/// The mutators only accumulate; nothing is normalized, so after 36 turns
/// of +10° `rotation_degrees` reads 360, not 0.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformState {
    /// Number of polygon sides, never below `MIN_SIDES`
    side_count: usize,
    /// Uniform scale factor (1.0 = unit circle)
    pub scale: f64,
    /// Accumulated rotation in degrees
    pub rotation_degrees: f64,
    /// X offset
    pub translate_x: f64,
    /// Y offset
    pub translate_y: f64,
    /// X shear (x' = x + shear_x * y)
    pub shear_x: f64,
    /// Y shear (y' = y + shear_y * x)
    pub shear_y: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            side_count: MIN_SIDES,
            scale: 1.0,
            rotation_degrees: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            shear_x: 0.0,
            shear_y: 0.0,
        }
    }
}

impl TransformState {
    pub fn side_count(&self) -> usize {
        self.side_count
    }

    /// Set the number of sides, keeping the current value on rejection
    pub fn set_side_count(&mut self, sides: i64) -> Result<(), SideCountError> {
        if sides < MIN_SIDES as i64 {
            return Err(SideCountError::TooFewSides(sides));
        }
        if sides > MAX_SIDES as i64 {
            return Err(SideCountError::TooManySides(sides));
        }
        self.side_count = sides as usize;
        Ok(())
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx;
        self.translate_y += dy;
    }

    pub fn rotate(&mut self, delta_degrees: f64) {
        self.rotation_degrees += delta_degrees;
    }

    /// Multiply the scale; repeated calls compound
    pub fn scale_by(&mut self, factor: f64) {
        self.scale *= factor;
    }

    pub fn shear(&mut self, dsx: f64, dsy: f64) {
        self.shear_x += dsx;
        self.shear_y += dsy;
    }
}
