//! Button wiring
//!
//! Every button in the control panel is a row in `CONTROLS`: an identifier, the
//! group it is shown under, its label and the fixed action it triggers. The UI
//! only iterates the table, so the bindings can be checked without a window.

use super::side_count::CIRCLE_SIDES;

/// Step used by the translation and shear buttons
const STEP: f64 = 0.1;
/// Rotation per button press, in degrees
const ROTATION_STEP: f64 = 10.0;
const SCALE_UP: f64 = 1.1;
const SCALE_DOWN: f64 = 0.9;

/// One transform operation with its arguments
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Translate { dx: f64, dy: f64 },
    Rotate { degrees: f64 },
    ScaleBy { factor: f64 },
    Shear { dx: f64, dy: f64 },
    /// Fed through the side-count controller like typed input
    SetSides(i64),
}

/// Identifier for every button in the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    RotatePositive,
    RotateNegative,
    ScaleUp,
    ScaleDown,
    ShearXPositive,
    ShearXNegative,
    ShearYPositive,
    ShearYNegative,
    Circle,
}

/// Panel section a button is placed in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlGroup {
    Translation,
    Rotation,
    Scale,
    Shear,
    Shortcuts,
}

impl ControlGroup {
    pub const ALL: &[ControlGroup] = &[
        Self::Translation,
        Self::Rotation,
        Self::Scale,
        Self::Shear,
        Self::Shortcuts,
    ];

    /// Section heading, `None` for ungrouped buttons
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Self::Translation => Some("Translation"),
            Self::Rotation => Some("Rotation"),
            Self::Scale => Some("Scale"),
            Self::Shear => Some("Shear"),
            Self::Shortcuts => None,
        }
    }
}

/// A single button binding
#[derive(Clone, Copy, Debug)]
pub struct Control {
    pub id: ControlId,
    pub group: ControlGroup,
    pub label: &'static str,
    pub action: Action,
}

impl Control {
    const fn new(id: ControlId, group: ControlGroup, label: &'static str, action: Action) -> Self {
        Self {
            id,
            group,
            label,
            action,
        }
    }

    /// Look up a binding by identifier
    pub fn get(id: ControlId) -> Option<&'static Control> {
        CONTROLS.iter().find(|c| c.id == id)
    }

    /// All bindings in a group, in table order
    pub fn in_group(group: ControlGroup) -> impl Iterator<Item = &'static Control> {
        CONTROLS.iter().filter(move |c| c.group == group)
    }
}

type Id = ControlId;
type Group = ControlGroup;

pub const CONTROLS: &[Control] = &[
    Control::new(Id::MoveUp, Group::Translation, "↑", Action::Translate { dx: 0.0, dy: STEP }),
    Control::new(Id::MoveDown, Group::Translation, "↓", Action::Translate { dx: 0.0, dy: -STEP }),
    Control::new(Id::MoveLeft, Group::Translation, "←", Action::Translate { dx: -STEP, dy: 0.0 }),
    Control::new(Id::MoveRight, Group::Translation, "→", Action::Translate { dx: STEP, dy: 0.0 }),
    Control::new(Id::RotatePositive, Group::Rotation, "Rotate +", Action::Rotate { degrees: ROTATION_STEP }),
    Control::new(Id::RotateNegative, Group::Rotation, "Rotate -", Action::Rotate { degrees: -ROTATION_STEP }),
    Control::new(Id::ScaleUp, Group::Scale, "Increase", Action::ScaleBy { factor: SCALE_UP }),
    Control::new(Id::ScaleDown, Group::Scale, "Decrease", Action::ScaleBy { factor: SCALE_DOWN }),
    Control::new(Id::ShearXPositive, Group::Shear, "X +", Action::Shear { dx: STEP, dy: 0.0 }),
    Control::new(Id::ShearXNegative, Group::Shear, "X -", Action::Shear { dx: -STEP, dy: 0.0 }),
    Control::new(Id::ShearYPositive, Group::Shear, "Y +", Action::Shear { dx: 0.0, dy: STEP }),
    Control::new(Id::ShearYNegative, Group::Shear, "Y -", Action::Shear { dx: 0.0, dy: -STEP }),
    Control::new(Id::Circle, Group::Shortcuts, "Create circle (100 sides)", Action::SetSides(CIRCLE_SIDES)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = CONTROLS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CONTROLS.len());
    }

    #[test]
    fn test_every_control_has_a_group() {
        let grouped: usize = ControlGroup::ALL
            .iter()
            .map(|g| Control::in_group(*g).count())
            .sum();
        assert_eq!(grouped, CONTROLS.len());
    }

    #[test]
    fn test_bindings() {
        let action = |id| Control::get(id).map(|c| c.action);

        assert_eq!(action(ControlId::MoveUp), Some(Action::Translate { dx: 0.0, dy: 0.1 }));
        assert_eq!(action(ControlId::MoveLeft), Some(Action::Translate { dx: -0.1, dy: 0.0 }));
        assert_eq!(action(ControlId::RotatePositive), Some(Action::Rotate { degrees: 10.0 }));
        assert_eq!(action(ControlId::RotateNegative), Some(Action::Rotate { degrees: -10.0 }));
        assert_eq!(action(ControlId::ScaleUp), Some(Action::ScaleBy { factor: 1.1 }));
        assert_eq!(action(ControlId::ScaleDown), Some(Action::ScaleBy { factor: 0.9 }));
        assert_eq!(action(ControlId::ShearYNegative), Some(Action::Shear { dx: 0.0, dy: -0.1 }));
        assert_eq!(action(ControlId::Circle), Some(Action::SetSides(100)));
    }

    #[test]
    fn test_only_shortcuts_lack_heading() {
        for group in ControlGroup::ALL {
            assert_eq!(group.heading().is_none(), *group == ControlGroup::Shortcuts);
        }
    }
}
