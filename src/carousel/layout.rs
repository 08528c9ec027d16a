//! Display-role assignment and stage placement for the circular list.

use glam::Vec3;

use crate::options::StageOptions;

/// Where an item sits in the current arrangement.
///
/// However many items the circle holds, only four roles are ever
/// distinguished: the focused item, its two immediate neighbors, and
/// everything else parked out of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayRole {
    /// The focused item, front and center.
    Active,
    /// Immediate predecessor of the active item.
    LeftNeighbor,
    /// Immediate successor of the active item.
    RightNeighbor,
    /// Neither active nor adjacent; parked below the stage.
    Hidden,
}

/// Role of `index` given the active item in a circular list of `count`
/// items.
///
/// Checked in order active → left → right, so with two items the
/// non-active one takes the left slot.
#[must_use]
pub fn role_for(index: usize, active: usize, count: usize) -> DisplayRole {
    if count == 0 {
        return DisplayRole::Hidden;
    }
    if index == active {
        return DisplayRole::Active;
    }
    if index == (active + count - 1) % count {
        return DisplayRole::LeftNeighbor;
    }
    if index == (active + 1) % count {
        return DisplayRole::RightNeighbor;
    }
    DisplayRole::Hidden
}

/// Base position and scale for an item, before parallax is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Scene-space position.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

/// Stage placement for a display role.
#[must_use]
pub fn placement_for(role: DisplayRole, stage: &StageOptions) -> Placement {
    match role {
        DisplayRole::Active => Placement {
            position: Vec3::from_array(stage.active_position),
            scale: stage.active_scale,
        },
        DisplayRole::LeftNeighbor => Placement {
            position: Vec3::from_array(stage.left_position),
            scale: stage.neighbor_scale,
        },
        DisplayRole::RightNeighbor => Placement {
            position: Vec3::from_array(stage.right_position),
            scale: stage.neighbor_scale,
        },
        DisplayRole::Hidden => Placement {
            position: Vec3::from_array(stage.hidden_position),
            scale: stage.hidden_scale,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_items_cover_all_visible_roles() {
        assert_eq!(role_for(0, 0, 3), DisplayRole::Active);
        assert_eq!(role_for(2, 0, 3), DisplayRole::LeftNeighbor);
        assert_eq!(role_for(1, 0, 3), DisplayRole::RightNeighbor);

        // Rotating the focus rotates the roles.
        assert_eq!(role_for(1, 1, 3), DisplayRole::Active);
        assert_eq!(role_for(0, 1, 3), DisplayRole::LeftNeighbor);
        assert_eq!(role_for(2, 1, 3), DisplayRole::RightNeighbor);

        assert_eq!(role_for(2, 2, 3), DisplayRole::Active);
        assert_eq!(role_for(1, 2, 3), DisplayRole::LeftNeighbor);
        assert_eq!(role_for(0, 2, 3), DisplayRole::RightNeighbor);
    }

    #[test]
    fn extra_items_are_hidden() {
        assert_eq!(role_for(2, 0, 4), DisplayRole::Hidden);
        assert_eq!(role_for(3, 1, 5), DisplayRole::Hidden);
    }

    #[test]
    fn two_items_prefer_the_left_slot() {
        assert_eq!(role_for(0, 0, 2), DisplayRole::Active);
        assert_eq!(role_for(1, 0, 2), DisplayRole::LeftNeighbor);
    }

    #[test]
    fn single_item_is_always_active() {
        assert_eq!(role_for(0, 0, 1), DisplayRole::Active);
    }

    #[test]
    fn placements_follow_the_stage_options() {
        let stage = StageOptions::default();

        let active = placement_for(DisplayRole::Active, &stage);
        assert_eq!(active.position, Vec3::new(0.0, 0.2, 0.0));
        assert!((active.scale - 1.8).abs() < 1e-6);

        let hidden = placement_for(DisplayRole::Hidden, &stage);
        assert!(hidden.position.y < -50.0);
    }
}
