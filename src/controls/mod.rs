//! Controls module - maps user input onto transform operations
//!
//! This module provides:
//! - Side-count text parsing for the "Number of sides" field
//! - A declarative table binding each button to one action

mod side_count;
mod table;

pub use side_count::parse_side_count;
pub use table::{Action, Control, ControlGroup, ControlId};
