//! Interactive session - the single state container behind the UI
//!
//! `Transformer` owns the long-lived `TransformState` and the display surface.
//! Every mutation redraws synchronously, exactly once, before returning.

use crate::controls::{parse_side_count, Action, Control, ControlId};
use crate::geometry::{SideCountError, TransformState};
use crate::pipeline;
use crate::render::DisplaySurface;

pub struct Transformer<S: DisplaySurface> {
    state: TransformState,
    surface: S,
    /// Contents of the side-count text field
    pub side_count_text: String,
}

impl<S: DisplaySurface> Transformer<S> {
    /// Start a session with default parameters and draw the initial polygon
    pub fn new(surface: S) -> Self {
        let state = TransformState::default();
        let mut session = Self {
            side_count_text: state.side_count().to_string(),
            state,
            surface,
        };
        session.redraw();
        session
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Recompute and present the polygon
    pub fn redraw(&mut self) {
        pipeline::redraw(&self.state, &mut self.surface);
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.state.translate(dx, dy);
        self.redraw();
    }

    pub fn rotate(&mut self, delta_degrees: f64) {
        self.state.rotate(delta_degrees);
        self.redraw();
    }

    pub fn scale_by(&mut self, factor: f64) {
        self.state.scale_by(factor);
        self.redraw();
    }

    pub fn shear(&mut self, dsx: f64, dsy: f64) {
        self.state.shear(dsx, dsy);
        self.redraw();
    }

    /// Handle a change of the side-count text field
    ///
    /// Invalid input is dropped without notice and the previous side count
    /// stays in effect. Only accepted values redraw.
    pub fn side_count_changed(&mut self, raw: &str) {
        match self.try_set_side_count(raw) {
            Ok(()) => self.redraw(),
            Err(e) => log::debug!("Ignoring side count input: {}", e),
        }
    }

    fn try_set_side_count(&mut self, raw: &str) -> Result<(), SideCountError> {
        let sides = parse_side_count(raw)?;
        self.state.set_side_count(sides)
    }

    /// Replace the text field contents and raise the change event
    pub fn set_side_count_text(&mut self, text: String) {
        self.side_count_text = text;
        let raw = self.side_count_text.clone();
        self.side_count_changed(&raw);
    }

    /// Perform one action from the control table
    ///
    /// `SetSides` (the circle shortcut) writes the value into the text field
    /// and goes through the same change handler as typed input.
    pub fn apply(&mut self, action: Action) {
        log::debug!("Applying {:?}", action);

        match action {
            Action::Translate { dx, dy } => self.translate(dx, dy),
            Action::Rotate { degrees } => self.rotate(degrees),
            Action::ScaleBy { factor } => self.scale_by(factor),
            Action::Shear { dx, dy } => self.shear(dx, dy),
            Action::SetSides(sides) => self.set_side_count_text(sides.to_string()),
        }
    }

    /// Handle a button press
    pub fn press(&mut self, id: ControlId) {
        if let Some(control) = Control::get(id) {
            self.apply(control.action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::RecordingSurface;

    fn session() -> Transformer<RecordingSurface> {
        Transformer::new(RecordingSurface::default())
    }

    #[test]
    fn test_initial_draw() {
        let session = session();
        assert_eq!(session.surface().redraw_count(), 1);
        assert_eq!(session.side_count_text, "3");
        assert_eq!(session.surface().last_plot().map(|p| p.len()), Some(4));
    }

    #[test]
    fn test_each_mutation_redraws_once() {
        let mut session = session();

        session.translate(0.1, 0.0);
        session.rotate(10.0);
        session.scale_by(1.1);
        session.shear(0.0, 0.1);

        assert_eq!(session.surface().redraw_count(), 5);
    }

    #[test]
    fn test_invalid_side_count_is_ignored() {
        let mut session = session();
        session.side_count_changed("5");
        assert_eq!(session.state().side_count(), 5);
        let redraws = session.surface().redraw_count();

        session.side_count_changed("abc");
        session.side_count_changed("2");
        session.side_count_changed("");

        assert_eq!(session.state().side_count(), 5);
        assert_eq!(session.surface().redraw_count(), redraws);
    }

    #[test]
    fn test_oversized_side_count_is_ignored() {
        let mut session = session();
        session.side_count_changed("5");
        let redraws = session.surface().redraw_count();

        session.side_count_changed("4000000000000000000");
        session.side_count_changed("10000000000");
        session.side_count_changed("99999999999999999999999");
        session.side_count_changed("100001");

        assert_eq!(session.state().side_count(), 5);
        assert_eq!(session.surface().redraw_count(), redraws);
        assert_eq!(session.surface().last_plot().map(|p| p.len()), Some(6));
    }

    #[test]
    fn test_valid_side_count_redraws() {
        let mut session = session();
        session.side_count_changed(" 8 ");

        assert_eq!(session.state().side_count(), 8);
        assert_eq!(session.surface().last_plot().map(|p| p.len()), Some(9));
    }

    #[test]
    fn test_circle_shortcut() {
        for start in ["3", "7", "250"] {
            let mut session = session();
            session.set_side_count_text(start.to_string());

            session.press(ControlId::Circle);

            assert_eq!(session.state().side_count(), 100);
            assert_eq!(session.side_count_text, "100");
        }
    }

    #[test]
    fn test_buttons_follow_table() {
        let mut session = session();

        session.press(ControlId::MoveUp);
        session.press(ControlId::MoveRight);
        session.press(ControlId::RotateNegative);
        session.press(ControlId::ScaleUp);
        session.press(ControlId::ShearXPositive);

        let state = session.state();
        assert!((state.translate_x - 0.1).abs() < 1e-12);
        assert!((state.translate_y - 0.1).abs() < 1e-12);
        assert!((state.rotation_degrees - (-10.0)).abs() < 1e-12);
        assert!((state.scale - 1.1).abs() < 1e-12);
        assert!((state.shear_x - 0.1).abs() < 1e-12);
        assert_eq!(state.shear_y, 0.0);
    }

    #[test]
    fn test_scale_buttons_compound() {
        let mut session = session();
        session.press(ControlId::ScaleUp);
        session.press(ControlId::ScaleUp);
        session.press(ControlId::ScaleDown);

        assert!((session.state().scale - 1.1 * 1.1 * 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_redraw_output_is_closed() {
        let mut session = session();
        session.side_count_changed("6");
        session.rotate(15.0);
        session.translate(0.5, -0.5);

        let points = session.surface().last_plot().unwrap_or_default();
        assert_eq!(points.len(), 7);
        assert_eq!(points.first(), points.last());
    }
}
