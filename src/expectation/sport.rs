use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ExpectationError;

/// Exponent used for every basketball season.
const BASKETBALL_EXPONENT: f64 = 13.91;
/// Exponent used for every football season.
const FOOTBALL_EXPONENT: f64 = 2.37;

/// Power applied to runs-per-game when deriving the baseball exponent.
const BASEBALL_EXPONENT_POWER: f64 = 0.287;
/// Power applied to goals-per-game when deriving the hockey exponent.
const HOCKEY_EXPONENT_POWER: f64 = 0.458;

/// Sports the calculator knows how to model.
///
/// Only regular-season win totals are modelled; ties and overtime losses are
/// not distinguished from ordinary losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Baseball,
    Hockey,
    Basketball,
    Football,
}

impl Sport {
    pub const ALL: [Sport; 4] = [
        Sport::Baseball,
        Sport::Hockey,
        Sport::Basketball,
        Sport::Football,
    ];

    /// Games in a full regular season.
    pub fn games_per_season(self) -> u32 {
        match self {
            Sport::Baseball => 162,
            Sport::Hockey => 82,
            Sport::Basketball => 82,
            Sport::Football => 17,
        }
    }

    /// Pythagorean exponent for a season with the given scoring totals.
    ///
    /// Baseball and hockey derive the exponent from the scoring environment
    /// (runs per game, goals scored per game); basketball and football use a
    /// fixed constant regardless of scores.
    pub fn exponent(self, points_scored: u32, points_allowed: u32) -> f64 {
        let games = self.games_per_season() as f64;
        match self {
            Sport::Baseball => {
                let runs_per_game = (points_allowed as f64 + points_scored as f64) / games;
                runs_per_game.powf(BASEBALL_EXPONENT_POWER)
            }
            Sport::Hockey => (points_scored as f64 / games).powf(HOCKEY_EXPONENT_POWER),
            Sport::Basketball => BASKETBALL_EXPONENT,
            Sport::Football => FOOTBALL_EXPONENT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sport::Baseball => "baseball",
            Sport::Hockey => "hockey",
            Sport::Basketball => "basketball",
            Sport::Football => "football",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts sport names and their league abbreviations, case-insensitively.
/// Numeric codes (`0`..=`3`, in declaration order) are accepted as well.
impl FromStr for Sport {
    type Err = ExpectationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "baseball" | "mlb" => Ok(Sport::Baseball),
            "hockey" | "ice_hockey" | "nhl" => Ok(Sport::Hockey),
            "basketball" | "nba" => Ok(Sport::Basketball),
            "football" | "american_football" | "nfl" => Ok(Sport::Football),
            other => match other.parse::<i32>() {
                Ok(code) => Sport::try_from(code),
                Err(_) => Err(ExpectationError::InvalidInput(format!(
                    "{s:?} is not a known sport"
                ))),
            },
        }
    }
}

impl TryFrom<i32> for Sport {
    type Error = ExpectationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Sport::ALL.get(idx).copied())
            .ok_or_else(|| {
                ExpectationError::InvalidInput(format!("{code} is not a known sport code"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn season_lengths_match_regular_seasons() {
        assert_eq!(Sport::Baseball.games_per_season(), 162);
        assert_eq!(Sport::Hockey.games_per_season(), 82);
        assert_eq!(Sport::Basketball.games_per_season(), 82);
        assert_eq!(Sport::Football.games_per_season(), 17);
    }

    #[test]
    fn fixed_exponents_ignore_scores() {
        for (scored, allowed) in [(0, 0), (9514, 9274), (100, 3000)] {
            assert_relative_eq!(Sport::Basketball.exponent(scored, allowed), 13.91);
            assert_relative_eq!(Sport::Football.exponent(scored, allowed), 2.37);
        }
    }

    #[test]
    fn baseball_exponent_tracks_run_environment() {
        let low = Sport::Baseball.exponent(600, 600);
        let high = Sport::Baseball.exponent(900, 900);
        assert!(high > low, "more runs per game should raise the exponent");
        assert_relative_eq!(
            Sport::Baseball.exponent(772, 606),
            (1378.0_f64 / 162.0).powf(0.287),
            epsilon = 1e-12
        );
    }

    #[test]
    fn hockey_exponent_only_uses_goals_scored() {
        assert_relative_eq!(
            Sport::Hockey.exponent(250, 204),
            Sport::Hockey.exponent(250, 999),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Sport::Hockey.exponent(229, 231),
            (229.0_f64 / 82.0).powf(0.458),
            epsilon = 1e-12
        );
    }

    #[test]
    fn parses_names_and_league_aliases() {
        assert_eq!("Baseball".parse::<Sport>().unwrap(), Sport::Baseball);
        assert_eq!("nhl".parse::<Sport>().unwrap(), Sport::Hockey);
        assert_eq!(" NBA ".parse::<Sport>().unwrap(), Sport::Basketball);
        assert_eq!("american_football".parse::<Sport>().unwrap(), Sport::Football);
    }

    #[test]
    fn parses_numeric_codes_in_declaration_order() {
        assert_eq!("0".parse::<Sport>().unwrap(), Sport::Baseball);
        assert_eq!(Sport::try_from(3).unwrap(), Sport::Football);
    }

    #[test]
    fn rejects_unknown_selectors() {
        assert!(matches!(
            "cricket".parse::<Sport>(),
            Err(ExpectationError::InvalidInput(_))
        ));
        assert!(matches!(Sport::try_from(4), Err(ExpectationError::InvalidInput(_))));
        assert!(matches!(Sport::try_from(-1), Err(ExpectationError::InvalidInput(_))));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for sport in Sport::ALL {
            assert_eq!(sport.to_string().parse::<Sport>().unwrap(), sport);
        }
    }
}
