//! Display-only data attached to tiles and creatures.
//!
//! Nothing in here affects the board; renderers look these up to decide what to draw.

use serde::{Deserialize, Serialize};

use crate::{
    game::coord::HexLayout,
    math::{UInt, Vec2, Vec2Ext},
};

/// The corner offsets of a cell, relative to its center, going clockwise.
#[must_use]
pub fn hex_corners(layout: &HexLayout) -> [Vec2; 6] {
    let start = layout.orientation.start_angle();

    core::array::from_fn(|i| Vec2::from_degrees(start + 60.0 * i as f32) * layout.size)
}

/// A named color slot of the active theme. Resolving it into an actual color is up to the renderer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accent {
    Forest,
    Mountain,
    Swamp,
    PlayerA,
    PlayerB,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Forest,
    Mountain,
    Swamp,
}

impl Biome {
    pub const ALL: [Self; 3] = [Self::Forest, Self::Mountain, Self::Swamp];

    /// The biome of the `index`th tile of a board.
    #[inline]
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self::ALL[index % 3]
    }

    #[inline]
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            Biome::Forest => Accent::Forest,
            Biome::Mountain => Accent::Mountain,
            Biome::Swamp => Accent::Swamp,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    PlayerA,
    PlayerB,
}

impl Controller {
    #[inline]
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            Controller::PlayerA => Accent::PlayerA,
            Controller::PlayerB => Accent::PlayerB,
        }
    }
}

/// An icon shown next to a creature. Interactable ones get a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityIcon {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub accent: Accent,
    pub enabled: bool,
    pub interactable: bool,
}

impl AbilityIcon {
    const fn passive(icon: &'static str, tooltip: &'static str, accent: Accent) -> Self {
        Self {
            icon,
            tooltip,
            accent,
            enabled: true,
            interactable: false,
        }
    }

    const fn active(icon: &'static str, tooltip: &'static str, accent: Accent, enabled: bool) -> Self {
        Self {
            icon,
            tooltip,
            accent,
            enabled,
            interactable: true,
        }
    }
}

/// The placeholder roster card of a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureProfile {
    pub name: &'static str,
    pub controller: Controller,
    pub health: UInt,
    pub power: UInt,
    pub energy: UInt,
    pub base_energy: UInt,
    pub icons: Vec<AbilityIcon>,
}

const ROSTER: [&str; 4] = ["Archer", "Warrior", "Wizard", "Gatherer"];

impl CreatureProfile {
    /// Creates the profile of the `index`th creature on the board.
    ///
    /// The first two creatures are kings, one per controller, and controllers alternate from there on.
    #[must_use]
    pub fn generate(index: usize) -> Self {
        let i = index as UInt;

        let controller = if index % 2 == 0 {
            Controller::PlayerA
        } else {
            Controller::PlayerB
        };
        let is_king = index < 2;

        let mut icons = Vec::new();
        if is_king {
            icons.push(AbilityIcon::passive("👑", "King", controller.accent()));
            icons.push(AbilityIcon::passive("📍", "Spawner", Accent::Forest));
            icons.push(AbilityIcon::passive("📦", "Collector", Accent::Forest));
        }
        if index % 3 == 2 {
            icons.push(AbilityIcon::active("🔥", "Fireball 2", Accent::Mountain, true));
        }
        if index % 4 == 3 {
            icons.push(AbilityIcon::active("🏹", "Arrowshot 2-3", Accent::Forest, true));
        }
        icons.push(AbilityIcon::active("🪄", "Heal 2", Accent::Swamp, (index / 2) % 2 == 0));

        Self {
            name: if is_king { "King" } else { ROSTER[index % 4] },
            controller,
            health: 20 - i.min(15),
            // 2 + i / 3, rounded to the nearest integer
            power: 2 + (i + 1) / 3,
            energy: i % 4,
            base_energy: i % 5 + 1,
            icons,
        }
    }

    /// The icons that get a button.
    pub fn interactable_icons(&self) -> impl Iterator<Item = &AbilityIcon> {
        self.icons.iter().filter(|v| v.interactable)
    }

    /// The name, cut down to what fits on the creature's banner.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let name = self.name;
        let end = name.char_indices().nth(7).map_or(name.len(), |(i, _)| i);

        &name[..end]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn first_creatures_are_kings() {
        let a = CreatureProfile::generate(0);
        let b = CreatureProfile::generate(1);

        assert_eq!(a.name, "King");
        assert_eq!(a.controller, Controller::PlayerA);
        assert_eq!(b.name, "King");
        assert_eq!(b.controller, Controller::PlayerB);
        assert_eq!(a.icons[0].accent, Accent::PlayerA);
        assert_eq!(b.icons[0].accent, Accent::PlayerB);
        assert_eq!(a.interactable_icons().count(), 1);
    }

    #[test]
    fn stats_follow_the_roster() {
        let p = CreatureProfile::generate(7);

        assert_eq!(p.name, "Gatherer");
        assert_eq!(p.short_name(), "Gathere");
        assert_eq!(p.controller, Controller::PlayerB);
        assert_eq!(p.health, 13);
        assert_eq!(p.power, 4);
        assert_eq!(p.energy, 3);
        assert_eq!(p.base_energy, 3);

        let tooltips = p.icons.iter().map(|v| v.tooltip).collect::<Vec<_>>();
        assert_eq!(tooltips, ["Arrowshot 2-3", "Heal 2"]);
        assert!(!p.icons[1].enabled);

        assert_eq!(CreatureProfile::generate(40).health, 5);
        assert_eq!(CreatureProfile::generate(5).power, 4);
    }

    #[test]
    fn biomes_cycle() {
        assert_eq!(Biome::for_index(0), Biome::Forest);
        assert_eq!(Biome::for_index(4), Biome::Mountain);
        assert_eq!(Biome::for_index(8), Biome::Swamp);
    }

    #[test]
    fn corners_sit_on_the_circumcircle() {
        let layout = HexLayout::flat(40.0);
        let corners = hex_corners(&layout);

        assert_abs_diff_eq!(corners[0].x, 40.0, epsilon = 1e-4);
        assert_abs_diff_eq!(corners[0].y, 0.0, epsilon = 1e-4);

        for corner in corners {
            assert_abs_diff_eq!(corner.magnitude(), 40.0, epsilon = 1e-3);
        }

        let pointy = hex_corners(&HexLayout::pointy(40.0));
        assert_abs_diff_eq!(pointy[2].x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(pointy[2].y, 40.0, epsilon = 1e-3);
    }
}
