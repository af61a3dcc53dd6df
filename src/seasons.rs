//! Sample regular seasons used when no scores are given on the command line.

use crate::expectation::{Sport, WinExpectancyCalculator};

/// One team's season totals.
#[derive(Debug, Clone, Copy)]
pub struct SampleSeason {
    pub team: &'static str,
    pub points_scored: u32,
    pub points_allowed: u32,
    pub sport: Sport,
    pub actual_wins: i32,
}

impl SampleSeason {
    const fn new(
        team: &'static str,
        points_scored: u32,
        points_allowed: u32,
        sport: Sport,
        actual_wins: i32,
    ) -> Self {
        Self {
            team,
            points_scored,
            points_allowed,
            sport,
            actual_wins,
        }
    }

    pub fn calculator(&self) -> WinExpectancyCalculator {
        WinExpectancyCalculator::new(
            self.points_scored,
            self.points_allowed,
            self.sport,
            self.actual_wins,
        )
    }
}

pub const SAMPLE_SEASONS: [SampleSeason; 13] = [
    SampleSeason::new("Mets", 772, 606, Sport::Baseball, 101),
    SampleSeason::new("Padres", 705, 660, Sport::Baseball, 89),
    SampleSeason::new("Yankees", 1000, 750, Sport::Baseball, 99),
    SampleSeason::new("Guardians", 698, 634, Sport::Baseball, 92),
    SampleSeason::new("Phillies", 747, 685, Sport::Baseball, 87),
    SampleSeason::new("Islanders", 229, 231, Sport::Hockey, 37),
    SampleSeason::new("Rangers", 250, 204, Sport::Hockey, 52),
    SampleSeason::new("Jets", 296, 316, Sport::Football, 7),
    SampleSeason::new("Packers", 370, 371, Sport::Football, 8),
    SampleSeason::new("Giants", 365, 371, Sport::Football, 9),
    SampleSeason::new("Vikings", 424, 427, Sport::Football, 13),
    SampleSeason::new("Cowboys", 467, 342, Sport::Football, 13),
    SampleSeason::new("Knicks", 9514, 9274, Sport::Basketball, 47),
];
