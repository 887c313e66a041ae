//! Geometry module - regular polygon construction and affine transforms
//!
//! This module provides:
//! - `regular_polygon` for building the vertex set of an N-gon
//! - `TransformState` holding the user-controlled transform parameters
//! - Matrix builders and `apply` for the combined affine transform

mod polygon;
mod state;
mod transform;

pub use polygon::regular_polygon;
pub use state::{SideCountError, TransformState};
pub use transform::{apply, combined};
