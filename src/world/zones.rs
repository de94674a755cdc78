//! Zone containment on the pier track.
//!
//! "Next to" means edge-to-edge: the gap between the entity's nearest edge and
//! the zone's nearest edge must fit inside the tolerance band. Overlap counts
//! as a gap of zero. Positions come from a physics step with fractional
//! velocities, so edges are never compared for exact equality.

use crate::shared::*;

/// True when an entity centred at `position` with `entity_half_width` is within
/// `tolerance` of the zone centred at `zone_anchor` with `zone_half_width`.
pub fn in_zone(
    position: f32,
    zone_anchor: f32,
    zone_half_width: f32,
    entity_half_width: f32,
    tolerance: f32,
) -> bool {
    let centre_distance = (position - zone_anchor).abs();
    let gap = centre_distance - zone_half_width - entity_half_width;
    gap <= tolerance.max(0.0)
}

impl TrackLayout {
    pub fn contains(&self, zone: &Zone, x: f32, half_width: f32) -> bool {
        in_zone(x, zone.anchor, zone.half_width, half_width, self.zone_tolerance)
    }

    pub fn near_fishing_spot(&self, x: f32, half_width: f32) -> bool {
        self.contains(&self.fishing_spot, x, half_width)
    }

    pub fn near_cooking_station(&self, x: f32, half_width: f32) -> bool {
        self.contains(&self.cooking_station, x, half_width)
    }

    /// Halfway between the two fixtures.
    pub fn midpoint(&self) -> f32 {
        (self.cooking_station.anchor + self.fishing_spot.anchor) / 2.0
    }

    /// Centre positions the player can occupy: between the oven's right edge
    /// and the pole's left edge, assuming the oven sits left of the pole.
    pub fn walkable_range(&self, half_width: f32) -> (f32, f32) {
        let (left, right) = if self.cooking_station.anchor <= self.fishing_spot.anchor {
            (&self.cooking_station, &self.fishing_spot)
        } else {
            (&self.fishing_spot, &self.cooking_station)
        };
        let min = left.right_edge() + half_width;
        let max = right.left_edge() - half_width;
        if min <= max {
            (min, max)
        } else {
            let mid = (min + max) / 2.0;
            (mid, mid)
        }
    }
}
