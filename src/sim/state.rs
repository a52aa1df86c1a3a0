//! Match state and core identifiers
//!
//! Everything a renderer needs to draw a frame lives in `MatchState`; it is
//! plain data and serializes to a JSON snapshot.

use serde::{Deserialize, Serialize};

use super::avatar::{Avatar, place_avatars};
use super::city::{City, generate_city};
use super::rng::RandomSource;
use super::trajectory::Projectile;
use super::wind::generate_wind;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Array index for per-player data
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Player number as shown to humans (1 or 2)
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Phase of the current round (derived, never stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the current player to throw
    AwaitingThrow,
    /// A banana is in the air
    InFlight,
    /// Someone was hit; waiting for a new round
    RoundOver,
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub city: City,
    /// Indexed by `PlayerId::index`
    pub avatars: [Avatar; 2],
    pub current_player: PlayerId,
    /// Rounds won, indexed by `PlayerId::index`
    pub scores: [u32; 2],
    /// Signed wind for this round (positive blows right)
    pub wind: i32,
    pub projectile: Option<Projectile>,
    /// Set exactly when the round is over
    pub winner: Option<PlayerId>,
    /// Round number since the last reset (1-based)
    pub round: u32,
}

impl MatchState {
    /// A first round with zeroed scores
    pub fn new(rng: &mut impl RandomSource) -> Self {
        let city = generate_city(rng);
        let avatars = place_avatars(&city, rng);
        let wind = generate_wind(rng);
        Self::from_parts(city, avatars, wind)
    }

    /// Assemble a first round from an existing world
    pub fn from_parts(city: City, avatars: [Avatar; 2], wind: i32) -> Self {
        Self {
            city,
            avatars,
            current_player: PlayerId::One,
            scores: [0, 0],
            wind,
            projectile: None,
            winner: None,
            round: 1,
        }
    }

    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn phase(&self) -> MatchPhase {
        if self.game_over() {
            MatchPhase::RoundOver
        } else if self.projectile.is_some() {
            MatchPhase::InFlight
        } else {
            MatchPhase::AwaitingThrow
        }
    }

    pub fn avatar(&self, player: PlayerId) -> &Avatar {
        &self.avatars[player.index()]
    }

    /// The avatar the current player is aiming at
    pub fn opponent_of_current(&self) -> &Avatar {
        self.avatar(self.current_player.opponent())
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.index()]
    }

    /// End the round because `loser` was hit; the other player scores
    ///
    /// Returns the winner. Has no effect once the round is already over.
    pub fn award_round(&mut self, loser: PlayerId) -> Option<PlayerId> {
        if self.game_over() {
            return None;
        }
        let winner = loser.opponent();
        self.scores[winner.index()] += 1;
        self.winner = Some(winner);
        self.projectile = None;
        log::info!(
            "{} wins round {} (score {}-{})",
            winner,
            self.round,
            self.scores[0],
            self.scores[1]
        );
        Some(winner)
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}
