use clap::Parser;

use crate::expectation::WinExpectancyCalculator;

/// Pythagorean win expectation for a team's regular season
#[derive(Parser, Debug, Clone)]
#[command(name = "pythagorean-wins", version, about)]
pub struct Config {
    /// Total points (runs, goals) scored over the season
    #[arg(long, env = "POINTS_SCORED")]
    pub points_scored: Option<u32>,

    /// Total points (runs, goals) allowed over the season
    #[arg(long, env = "POINTS_ALLOWED")]
    pub points_allowed: Option<u32>,

    /// Sport: baseball, hockey, basketball, football (league names and 0-3 also accepted)
    #[arg(long, env = "SPORT", default_value = "baseball")]
    pub sport: String,

    /// Actual wins; 0 or less leaves the actual/delta figures out
    #[arg(long, env = "ACTUAL_WINS", default_value = "0", allow_negative_numbers = true)]
    pub actual_wins: i32,

    /// Team label printed in front of the summary
    #[arg(long, env = "TEAM")]
    pub team: Option<String>,

    /// Print reports as JSON instead of text
    #[arg(long, env = "JSON_OUTPUT", default_value = "false")]
    pub json: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.points_scored.is_some() != self.points_allowed.is_some() {
            anyhow::bail!(
                "--points-scored and --points-allowed must be given together (omit both to run the sample seasons)"
            );
        }
        Ok(())
    }

    /// The season described on the command line, or `None` when no scores
    /// were given.
    pub fn season(&self) -> anyhow::Result<Option<WinExpectancyCalculator>> {
        let (Some(scored), Some(allowed)) = (self.points_scored, self.points_allowed) else {
            return Ok(None);
        };
        let calc =
            WinExpectancyCalculator::from_selector(scored, allowed, &self.sport, self.actual_wins)?;
        Ok(Some(calc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectation::Sport;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("pythagorean-wins").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_scores_means_sample_run() {
        let config = parse(&[]);
        config.validate().unwrap();
        assert!(config.season().unwrap().is_none());
    }

    #[test]
    fn single_score_is_rejected() {
        let config = parse(&["--points-scored", "700"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn builds_season_from_flags() {
        let config = parse(&[
            "--points-scored",
            "9514",
            "--points-allowed",
            "9274",
            "--sport",
            "nba",
            "--actual-wins",
            "47",
        ]);
        config.validate().unwrap();
        let calc = config.season().unwrap().unwrap();
        assert_eq!(calc.sport(), Sport::Basketball);
        assert_eq!(calc.actual_wins(), 47);
    }

    #[test]
    fn unknown_sport_surfaces_invalid_input() {
        let config = parse(&["--points-scored", "1", "--points-allowed", "2", "--sport", "polo"]);
        let err = config.season().unwrap_err();
        assert!(err.to_string().starts_with("Invalid input"));
    }
}
