pub mod calculator;
pub mod report;
pub mod sport;

use thiserror::Error;

pub use calculator::WinExpectancyCalculator;
pub use report::Report;
pub use sport::Sport;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpectationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
