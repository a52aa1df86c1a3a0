//! Match operations
//!
//! Each operation is a synchronous transform of an explicit `MatchState`.
//! Calls that make no sense in the current phase are silent no-ops.

use glam::Vec2;

use super::collision::{HitTarget, StepResult, detect_collision};
use super::destruction::apply_explosion;
use super::rng::RandomSource;
use super::state::{MatchState, PlayerId};
use super::trajectory::{advance, create_projectile};
use crate::consts::*;

/// What `fire` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// A banana is already in flight or the round is over
    Ignored,
    Launched,
    /// Velocity too low: the banana lands on the thrower, who loses the round
    SelfKill { loser: PlayerId },
}

/// Throw for the current player
///
/// Angle and velocity are expected to be validated already; only the
/// self-kill rule is enforced here.
pub fn fire(state: &mut MatchState, angle_degrees: f32, velocity: f32) -> FireOutcome {
    if state.projectile.is_some() || state.game_over() {
        log::debug!("Ignoring throw in phase {:?}", state.phase());
        return FireOutcome::Ignored;
    }

    let thrower = state.current_player;
    if velocity < SELF_KILL_VELOCITY {
        log::info!("{} dropped the banana on themselves", thrower);
        state.award_round(thrower);
        return FireOutcome::SelfKill { loser: thrower };
    }

    let projectile = create_projectile(state.avatar(thrower), angle_degrees, velocity);
    log::info!(
        "{} throws at {}° with velocity {} (wind {})",
        thrower,
        angle_degrees,
        velocity,
        state.wind
    );
    state.projectile = Some(projectile);
    FireOutcome::Launched
}

/// Advance the banana by `dt` and resolve whatever it hit
pub fn step(state: &mut MatchState, dt: f32) -> StepResult {
    if state.game_over() {
        return StepResult::miss();
    }
    let Some(projectile) = state.projectile else {
        return StepResult::miss();
    };

    let moved = advance(&projectile, state.wind, dt);
    state.projectile = Some(moved);

    let result = detect_collision(&moved, &state.avatars, &state.city);
    if !result.hit {
        return result;
    }

    state.projectile = None;
    log::debug!(
        "Throw ended at t={:.1}: {:?} at {:?}",
        moved.time,
        result.target,
        result.hit_pos
    );

    match result.target {
        Some(HitTarget::Avatar(victim)) => {
            state.award_round(victim);
        }
        // The sun gives the thrower another go
        Some(HitTarget::Sun) => {}
        Some(HitTarget::Terrain) | None => state.switch_player(),
    }
    result
}

/// Drop a banana that never landed; the turn passes as if it left the screen
pub fn abandon_throw(state: &mut MatchState) -> bool {
    if state.projectile.take().is_none() {
        return false;
    }
    log::warn!("Abandoned a throw that never landed");
    state.switch_player();
    true
}

/// Detonate at (`x`, `y`); returns the avatar this blast killed, if any
pub fn apply_explosion_at(state: &mut MatchState, x: f32, y: f32, radius: f32) -> Option<PlayerId> {
    apply_explosion(state, Vec2::new(x, y), radius)
}

/// Fresh skyline, avatars and wind; scores carry over
pub fn new_round(state: &mut MatchState, rng: &mut impl RandomSource) {
    let scores = state.scores;
    let round = state.round + 1;
    *state = MatchState::new(rng);
    state.scores = scores;
    state.round = round;
    log::info!(
        "Round {} begins (score {}-{})",
        round,
        scores[0],
        scores[1]
    );
}

/// Start over from round 1 with zeroed scores
pub fn reset(state: &mut MatchState, rng: &mut impl RandomSource) {
    *state = MatchState::new(rng);
    log::info!("Match reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::avatar::Avatar;
    use crate::sim::city::{Building, BuildingColor, City, SlopePattern};
    use crate::sim::rng::{ScriptedRandom, seeded};
    use crate::sim::state::MatchPhase;

    /// Two short perches far apart and nothing in between
    fn open_field(wind: i32) -> MatchState {
        let mut rng = ScriptedRandom::default();
        let buildings = vec![
            Building::new(44, 40, 10, BuildingColor::Red, &mut rng),
            Building::new(540, 40, 10, BuildingColor::Gray, &mut rng),
        ];
        let city = City {
            slope: SlopePattern::Rising,
            buildings,
        };
        let avatars = [
            Avatar::on_building(&city.buildings[0], PlayerId::One),
            Avatar::on_building(&city.buildings[1], PlayerId::Two),
        ];
        MatchState::from_parts(city, avatars, wind)
    }

    fn run_throw(state: &mut MatchState) -> StepResult {
        for _ in 0..10_000 {
            let result = step(state, SIM_DT);
            if result.hit {
                return result;
            }
        }
        panic!("throw never ended");
    }

    #[test]
    fn test_self_kill() {
        let mut state = open_field(0);
        let outcome = fire(&mut state, 45.0, 1.0);
        assert_eq!(outcome, FireOutcome::SelfKill { loser: PlayerId::One });
        assert_eq!(state.winner, Some(PlayerId::Two));
        assert_eq!(state.scores, [0, 1]);
        assert!(state.projectile.is_none());
        assert_eq!(state.phase(), MatchPhase::RoundOver);
    }

    #[test]
    fn test_fire_ignored_in_flight_and_after_round() {
        let mut state = open_field(0);
        assert_eq!(fire(&mut state, 45.0, 50.0), FireOutcome::Launched);
        let launched = state.projectile;
        assert_eq!(fire(&mut state, 80.0, 10.0), FireOutcome::Ignored);
        assert_eq!(state.projectile, launched);

        let mut over = open_field(0);
        fire(&mut over, 45.0, 1.0);
        assert_eq!(fire(&mut over, 45.0, 50.0), FireOutcome::Ignored);
        assert!(over.projectile.is_none());
        assert_eq!(over.scores, [0, 1]);
    }

    #[test]
    fn test_step_without_projectile_is_noop() {
        let mut state = open_field(0);
        assert_eq!(step(&mut state, SIM_DT), StepResult::miss());
        assert_eq!(state.current_player, PlayerId::One);
    }

    #[test]
    fn test_ground_hit_switches_player() {
        let mut state = open_field(0);
        fire(&mut state, 45.0, 50.0);
        let result = run_throw(&mut state);
        assert_eq!(result.target, Some(HitTarget::Terrain));
        assert!(result.hit_pos.is_some_and(|p| p.y >= PLAY_HEIGHT - GROUND_MARGIN));
        assert!(state.projectile.is_none());
        assert_eq!(state.current_player, PlayerId::Two);
        assert!(!state.game_over());
    }

    #[test]
    fn test_off_side_switches_player() {
        let mut state = open_field(0);
        // Straight at the left edge
        fire(&mut state, 179.0, 100.0);
        let result = run_throw(&mut state);
        assert!(result.hit);
        assert_eq!(result.target, None);
        assert_eq!(state.current_player, PlayerId::Two);
        assert!(state.city.buildings.iter().all(|b| b.holes.is_empty()));
    }

    #[test]
    fn test_sun_hit_keeps_player() {
        let mut state = open_field(0);
        // Put the banana just below the sun, already falling
        fire(&mut state, 45.0, 50.0);
        if let Some(p) = state.projectile.as_mut() {
            p.start = Vec2::new(SUN_X, SUN_Y);
            p.init_vel = Vec2::ZERO;
        }
        let result = step(&mut state, SIM_DT);
        assert_eq!(result.target, Some(HitTarget::Sun));
        assert!(state.projectile.is_none());
        assert_eq!(state.current_player, PlayerId::One);
    }

    #[test]
    fn test_direct_hit_ends_round() {
        let mut state = open_field(0);
        // Drop the banana right onto player 2
        fire(&mut state, 45.0, 50.0);
        let target = state.avatar(PlayerId::Two).pos;
        if let Some(p) = state.projectile.as_mut() {
            p.start = target - Vec2::new(8.0, 0.0);
            p.init_vel = Vec2::ZERO;
        }
        let result = step(&mut state, SIM_DT);
        assert_eq!(result.target, Some(HitTarget::Avatar(PlayerId::Two)));
        assert_eq!(state.winner, Some(PlayerId::One));
        assert_eq!(state.scores, [1, 0]);
        assert!(state.projectile.is_none());
        assert_eq!(step(&mut state, SIM_DT), StepResult::miss());
    }

    #[test]
    fn test_abandon_throw_passes_turn() {
        let mut state = open_field(0);
        assert!(!abandon_throw(&mut state));
        fire(&mut state, 45.0, 50.0);
        assert!(abandon_throw(&mut state));
        assert!(state.projectile.is_none());
        assert_eq!(state.current_player, PlayerId::Two);
    }

    #[test]
    fn test_explosion_at_reports_kill_once() {
        let mut state = open_field(0);
        let pos = state.avatar(PlayerId::One).pos;
        assert_eq!(
            apply_explosion_at(&mut state, pos.x, pos.y, EXPLOSION_RADIUS),
            Some(PlayerId::One)
        );
        assert_eq!(apply_explosion_at(&mut state, pos.x, pos.y, EXPLOSION_RADIUS), None);
        assert_eq!(state.scores, [0, 1]);
    }

    #[test]
    fn test_new_round_keeps_scores() {
        let mut rng = seeded(9);
        let mut state = MatchState::new(&mut rng);
        fire(&mut state, 45.0, 1.0);
        new_round(&mut state, &mut rng);
        assert_eq!(state.scores, [0, 1]);
        assert_eq!(state.round, 2);
        assert_eq!(state.phase(), MatchPhase::AwaitingThrow);
        assert_eq!(state.current_player, PlayerId::One);

        reset(&mut state, &mut rng);
        assert_eq!(state.scores, [0, 0]);
        assert_eq!(state.round, 1);
    }
}
