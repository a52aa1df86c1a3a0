//! Headless session driver
//!
//! Owns the match state together with its random source and settings, and
//! sequences a whole throw (fire, step until it lands, explode) the way an
//! interactive front end would, minus the animation.

use serde::Serialize;

use crate::settings::Settings;
use crate::sim::{
    self, FireOutcome, HitTarget, MatchState, PlayerId, RandomSource, SeededRandom, StepResult,
};
use crate::validation::{InputError, validate_throw};

/// Everything that happened during one resolved throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThrowReport {
    pub thrower: PlayerId,
    /// How the throw ended; a miss when nothing was launched
    pub result: StepResult,
    /// Ticks simulated before the throw ended
    pub ticks: u32,
    pub self_kill: bool,
    /// Whether an explosion was detonated
    pub exploded: bool,
    /// Round winner, if this throw decided the round
    pub winner: Option<PlayerId>,
}

/// A running match
#[derive(Debug, Clone)]
pub struct Duel<R: RandomSource = SeededRandom> {
    state: MatchState,
    rng: R,
    settings: Settings,
}

impl Duel<SeededRandom> {
    /// Seeded from `settings.seed`, or from entropy when unset
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Starting duel with seed {}", seed);
        Self::with_rng(sim::seeded(seed), settings)
    }
}

impl<R: RandomSource> Duel<R> {
    pub fn with_rng(mut rng: R, settings: Settings) -> Self {
        let state = MatchState::new(&mut rng);
        Self {
            state,
            rng,
            settings,
        }
    }

    /// Wrap an existing state (scripted scenarios, replays)
    pub fn from_state(state: MatchState, rng: R, settings: Settings) -> Self {
        Self {
            state,
            rng,
            settings,
        }
    }

    /// Read-only view for renderers
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }

    pub fn fire(&mut self, angle_degrees: f32, velocity: f32) -> FireOutcome {
        sim::fire(&mut self.state, angle_degrees, velocity)
    }

    /// One fixed tick, scaled by the configured time scale
    pub fn step(&mut self) -> StepResult {
        sim::step(&mut self.state, self.settings.step_dt())
    }

    pub fn apply_explosion_at(&mut self, x: f32, y: f32, radius: f32) -> Option<PlayerId> {
        sim::apply_explosion_at(&mut self.state, x, y, radius)
    }

    pub fn new_round(&mut self) {
        sim::new_round(&mut self.state, &mut self.rng);
    }

    pub fn reset(&mut self) {
        sim::reset(&mut self.state, &mut self.rng);
    }

    /// Validate, throw, fly until the banana lands and detonate it
    pub fn resolve_throw(&mut self, angle: f32, velocity: f32) -> Result<ThrowReport, InputError> {
        let input = validate_throw(angle, velocity)?;
        let thrower = self.state.current_player;
        let radius = self.settings.explosion_radius;
        let mut report = ThrowReport {
            thrower,
            result: StepResult::miss(),
            ticks: 0,
            self_kill: false,
            exploded: false,
            winner: None,
        };

        match self.fire(input.angle, input.velocity) {
            FireOutcome::Ignored => return Ok(report),
            FireOutcome::SelfKill { loser } => {
                // The banana goes off in the thrower's hands
                let at = self.state.avatar(loser).pos;
                self.apply_explosion_at(at.x, at.y, radius);
                report.self_kill = true;
                report.exploded = true;
                report.winner = self.state.winner;
                return Ok(report);
            }
            FireOutcome::Launched => {}
        }

        while report.ticks < self.settings.max_ticks_per_throw {
            report.ticks += 1;
            let result = self.step();
            if !result.hit {
                continue;
            }
            report.result = result;
            if result.explodes() {
                if let Some(at) = result.hit_pos {
                    self.apply_explosion_at(at.x, at.y, radius);
                    report.exploded = true;
                }
            }
            report.winner = self.state.winner;
            if let Some(HitTarget::Sun) = result.target {
                log::info!("The sun is not amused");
            }
            return Ok(report);
        }

        sim::abandon_throw(&mut self.state);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{MatchPhase, ScriptedRandom};

    fn duel(seed: u64) -> Duel {
        Duel::new(Settings {
            seed: Some(seed),
            ..Settings::default()
        })
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = duel(314);
        let b = duel(314);
        assert_eq!(a.snapshot_json().unwrap(), b.snapshot_json().unwrap());
    }

    #[test]
    fn test_invalid_input_does_not_touch_state() {
        let mut d = duel(1);
        let before = d.snapshot_json().unwrap();
        assert_eq!(
            d.resolve_throw(0.0, 50.0),
            Err(InputError::AngleOutOfRange(0.0))
        );
        assert_eq!(
            d.resolve_throw(45.0, 201.0),
            Err(InputError::VelocityOutOfRange(201.0))
        );
        assert_eq!(d.snapshot_json().unwrap(), before);
    }

    #[test]
    fn test_self_kill_explodes_on_thrower() {
        let mut d = duel(2);
        let report = d.resolve_throw(45.0, 1.0).unwrap();
        assert!(report.self_kill);
        assert!(report.exploded);
        assert_eq!(report.thrower, PlayerId::One);
        assert_eq!(report.winner, Some(PlayerId::Two));
        assert_eq!(d.state().scores, [0, 1]);
        // Round is over; further throws are ignored
        let ignored = d.resolve_throw(45.0, 50.0).unwrap();
        assert_eq!(ignored.ticks, 0);
        assert!(!ignored.result.hit);
    }

    #[test]
    fn test_throw_always_resolves() {
        let mut d = duel(3);
        for (angle, velocity) in [(45.0, 50.0), (80.0, 120.0), (10.0, 200.0), (120.0, 30.0)] {
            if d.state().game_over() {
                d.new_round();
            }
            let report = d.resolve_throw(angle, velocity).unwrap();
            assert!(report.result.hit, "throw {angle}/{velocity} never landed");
            assert!(d.state().projectile.is_none());
            assert_ne!(d.state().phase(), MatchPhase::InFlight);
        }
    }

    #[test]
    fn test_tick_budget_abandons_throw() {
        let settings = Settings {
            seed: Some(4),
            max_ticks_per_throw: 1,
            ..Settings::default()
        };
        let mut d = Duel::new(settings);
        let report = d.resolve_throw(89.0, 150.0).unwrap();
        assert!(!report.result.hit);
        assert_eq!(report.ticks, 1);
        assert!(d.state().projectile.is_none());
        assert_eq!(d.state().current_player, PlayerId::Two);
    }

    #[test]
    fn test_reset_clears_scores() {
        let mut d = Duel::with_rng(ScriptedRandom::default(), Settings::default());
        d.resolve_throw(45.0, 1.0).unwrap();
        d.new_round();
        assert_eq!(d.state().scores, [0, 1]);
        assert_eq!(d.state().round, 2);
        d.reset();
        assert_eq!(d.state().scores, [0, 0]);
        assert_eq!(d.state().round, 1);
    }
}
