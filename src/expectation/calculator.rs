//! Pythagorean win expectation for a single team-season.
//!
//! The estimate follows Bill James' formula:
//!
//! ```text
//! expected win% = scored^exp / (scored^exp + allowed^exp)
//! ```
//!
//! where `exp` reflects how much luck the sport carries. Higher exponents
//! mean the scoring margin predicts wins more reliably (basketball), lower
//! exponents leave more room for close-game variance (baseball, football).

use std::fmt;

use tracing::debug;

use super::report::Report;
use super::sport::Sport;
use super::ExpectationError;

/// Season scoring totals for one team plus the metrics derived from them.
///
/// Everything is fixed at construction; the accessors are pure reads.
#[derive(Debug, Clone, PartialEq)]
pub struct WinExpectancyCalculator {
    points_scored: u32,
    points_allowed: u32,
    sport: Sport,
    /// Observed wins. Zero or negative means "not supplied".
    actual_wins: i32,
    total_games: u32,
    exponent: f64,
}

impl WinExpectancyCalculator {
    pub fn new(points_scored: u32, points_allowed: u32, sport: Sport, actual_wins: i32) -> Self {
        let total_games = sport.games_per_season();
        let exponent = sport.exponent(points_scored, points_allowed);
        debug!(
            "{} season ({}-{}): {} games, exponent {:.4}",
            sport, points_scored, points_allowed, total_games, exponent
        );
        Self {
            points_scored,
            points_allowed,
            sport,
            actual_wins,
            total_games,
            exponent,
        }
    }

    /// Calculator for a season where the real win total is unknown.
    pub fn without_actual_wins(points_scored: u32, points_allowed: u32, sport: Sport) -> Self {
        Self::new(points_scored, points_allowed, sport, 0)
    }

    /// Build from an open sport selector (name, league alias or numeric code).
    ///
    /// Fails with [`ExpectationError::InvalidInput`] when the selector does
    /// not name a supported sport.
    pub fn from_selector(
        points_scored: u32,
        points_allowed: u32,
        selector: &str,
        actual_wins: i32,
    ) -> Result<Self, ExpectationError> {
        let sport: Sport = selector.parse()?;
        Ok(Self::new(points_scored, points_allowed, sport, actual_wins))
    }

    pub fn points_scored(&self) -> u32 {
        self.points_scored
    }

    pub fn points_allowed(&self) -> u32 {
        self.points_allowed
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn actual_wins(&self) -> i32 {
        self.actual_wins
    }

    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Whether a real win total was supplied (strictly positive).
    pub fn has_actual_wins(&self) -> bool {
        self.actual_wins > 0
    }

    /// Expected share of games won, as a fraction in `[0, 1]`.
    ///
    /// Returns NaN when both scoring totals are zero, since the formula is
    /// `0 / 0` in that case.
    pub fn expected_win_percentage(&self) -> f64 {
        let scored = (self.points_scored as f64).powf(self.exponent);
        let allowed = (self.points_allowed as f64).powf(self.exponent);
        scored / (scored + allowed)
    }

    /// Observed share of games won, as a fraction (not scaled to 100).
    pub fn actual_win_percentage(&self) -> f64 {
        self.actual_wins as f64 / self.total_games as f64
    }

    /// Expected wins over the season, rounded to a whole number with ties
    /// going away from zero.
    pub fn expected_wins(&self) -> f64 {
        whole_wins(self.expected_win_percentage() * self.total_games as f64)
    }

    /// Actual wins minus expected wins. Positive means the team won more
    /// games than its scoring margin suggests.
    pub fn win_delta(&self) -> f64 {
        self.actual_wins as f64 - self.expected_wins()
    }

    /// Actual minus expected win percentage, in percentage points.
    ///
    /// Both sides are scaled to percentages before subtracting.
    pub fn win_percentage_delta(&self) -> f64 {
        self.actual_win_percentage() * 100.0 - self.expected_win_percentage() * 100.0
    }

    /// Human-readable summary; identical to the `Display` output.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Serializable snapshot of every metric, optionally labelled with a team.
    pub fn report(&self, team: Option<&str>) -> Report {
        let supplied = self.has_actual_wins();
        Report {
            team: team.map(str::to_string),
            sport: self.sport,
            points_scored: self.points_scored,
            points_allowed: self.points_allowed,
            total_games: self.total_games,
            exponent: self.exponent,
            expected_win_percentage: self.expected_win_percentage(),
            expected_wins: self.expected_wins(),
            actual_wins: supplied.then_some(self.actual_wins),
            actual_win_percentage: supplied.then(|| self.actual_win_percentage()),
            win_delta: supplied.then(|| self.win_delta()),
            win_percentage_delta: supplied.then(|| round_to(self.win_percentage_delta(), 2)),
        }
    }
}

impl fmt::Display for WinExpectancyCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected_pct = self.expected_win_percentage();
        let expected_wins = self.expected_wins();

        if !self.has_actual_wins() {
            return write!(
                f,
                "Expected Number of Wins = {}, Expected Winning% = {} ({}%)",
                expected_wins,
                round_to(expected_pct, 4),
                round_to(expected_pct * 100.0, 2),
            );
        }

        let actual_pct = self.actual_win_percentage();
        writeln!(
            f,
            "Expected Number of Wins = {}, Actual Number of Wins = {}, \
             Delta between Actual and Expected Number of Wins = {}",
            expected_wins,
            self.actual_wins,
            self.win_delta(),
        )?;
        write!(
            f,
            "Expected Winning% = {} ({}%), Actual Winning% = {} ({}%), \
             Delta Between Actual and Expected Win% = {}%",
            round_to(expected_pct, 4),
            round_to(expected_pct * 100.0, 2),
            round_to(actual_pct, 4),
            round_to(actual_pct * 100.0, 2),
            round_to(self.win_percentage_delta(), 2),
        )
    }
}

/// Round a raw win count to a whole number, ties away from zero.
fn whole_wins(raw: f64) -> f64 {
    raw.round()
}

/// Round for display to `places` decimals; exact midpoints go to the even
/// neighbour.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}
