//! Explosions: carve the skyline and check whether an avatar was caught

use glam::Vec2;

use super::city::ExplosionHole;
use super::collision::explosion_reaches;
use super::geom::circle_intersects_rect;
use super::state::{MatchState, PlayerId};

/// Blow a hole at `center`
///
/// Every building touched by the circle records a hole and every window
/// strictly inside it is removed; windows on the rim survive. Returns the
/// avatar killed by this blast, if the blast is what ended the round.
pub fn apply_explosion(state: &mut MatchState, center: Vec2, radius: f32) -> Option<PlayerId> {
    let hole = ExplosionHole { center, radius };
    let mut damaged = 0;

    for building in &mut state.city.buildings {
        if circle_intersects_rect(center, radius, &building.rect()) {
            building.holes.push(hole);
            damaged += 1;
        }
        building
            .windows
            .retain(|w| w.pos.distance(center) >= radius);
    }
    log::debug!(
        "Explosion at ({:.1}, {:.1}) r={} damaged {} buildings",
        center.x,
        center.y,
        radius,
        damaged
    );

    if state.game_over() {
        return None;
    }

    // Player 1 is checked first; only one avatar can lose per blast
    let victim = state
        .avatars
        .iter()
        .find(|a| explosion_reaches(a, center, radius))
        .map(|a| a.player)?;

    state.award_round(victim).map(|_| victim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::avatar::Avatar;
    use crate::sim::city::{Building, BuildingColor, City, SlopePattern};
    use crate::sim::rng::ScriptedRandom;

    fn state() -> MatchState {
        let mut rng = ScriptedRandom::default();
        let buildings = vec![
            Building::new(100, 50, 100, BuildingColor::Red, &mut rng),
            Building::new(152, 50, 150, BuildingColor::Gray, &mut rng),
            Building::new(400, 50, 100, BuildingColor::Brown, &mut rng),
        ];
        let avatars = [
            Avatar {
                pos: Vec2::new(111.0, 205.0),
                player: PlayerId::One,
            },
            Avatar {
                pos: Vec2::new(411.0, 205.0),
                player: PlayerId::Two,
            },
        ];
        MatchState::from_parts(
            City {
                slope: SlopePattern::Rising,
                buildings,
            },
            avatars,
            0,
        )
    }

    #[test]
    fn test_holes_added_to_intersecting_buildings() {
        let mut s = state();
        // Straddles the seam between the first two buildings
        let victim = apply_explosion(&mut s, Vec2::new(151.0, 300.0), 20.0);
        assert_eq!(victim, None);
        assert_eq!(s.city.buildings[0].holes.len(), 1);
        assert_eq!(s.city.buildings[1].holes.len(), 1);
        assert!(s.city.buildings[2].holes.is_empty());
    }

    #[test]
    fn test_windows_inside_radius_removed() {
        let mut s = state();
        let center = Vec2::new(125.0, 280.0);
        let before = s.city.buildings[0].windows.len();
        apply_explosion(&mut s, center, 20.0);

        let left = &s.city.buildings[0].windows;
        assert!(left.len() < before);
        assert!(left.iter().all(|w| w.pos.distance(center) >= 20.0));
        assert_eq!(s.city.buildings[2].windows.len(), before);
    }

    #[test]
    fn test_window_on_rim_survives() {
        let mut s = state();
        let window = s.city.buildings[2].windows[0].pos;
        apply_explosion(&mut s, window + Vec2::new(0.0, 10.0), 10.0);
        assert!(s.city.buildings[2].windows.iter().any(|w| w.pos == window));
        apply_explosion(&mut s, window + Vec2::new(0.0, 9.0), 10.0);
        assert!(s.city.buildings[2].windows.iter().all(|w| w.pos != window));
    }

    #[test]
    fn test_reapplying_adds_hole_but_not_removals() {
        let mut s = state();
        let center = Vec2::new(125.0, 280.0);
        apply_explosion(&mut s, center, 20.0);
        let windows = s.city.window_count();
        apply_explosion(&mut s, center, 20.0);
        assert_eq!(s.city.window_count(), windows);
        assert_eq!(s.city.buildings[0].holes.len(), 2);
    }

    #[test]
    fn test_blast_kills_nearby_avatar() {
        let mut s = state();
        let victim = apply_explosion(&mut s, Vec2::new(411.0, 235.0), 30.0);
        assert_eq!(victim, Some(PlayerId::Two));
        assert_eq!(s.winner, Some(PlayerId::One));
        assert_eq!(s.scores, [1, 0]);
    }

    #[test]
    fn test_no_second_winner_after_round_over() {
        let mut s = state();
        apply_explosion(&mut s, Vec2::new(411.0, 235.0), 30.0);
        let again = apply_explosion(&mut s, Vec2::new(111.0, 235.0), 30.0);
        assert_eq!(again, None);
        assert_eq!(s.scores, [1, 0]);
        // Terrain still takes damage
        assert_eq!(s.city.buildings[0].holes.len(), 1);
    }

    #[test]
    fn test_only_first_avatar_in_order_scores() {
        let mut s = state();
        s.avatars[1].pos = Vec2::new(130.0, 205.0);
        let victim = apply_explosion(&mut s, Vec2::new(120.0, 205.0), 30.0);
        assert_eq!(victim, Some(PlayerId::One));
        assert_eq!(s.scores, [0, 1]);
    }
}
