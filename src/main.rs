use anyhow::Result;
use clap::Parser;
use tracing::info;

mod config;
mod expectation;
mod seasons;

use config::Config;
use expectation::{Report, WinExpectancyCalculator};
use seasons::SAMPLE_SEASONS;

fn main() -> Result<()> {
    // Initialise tracing / logging (stderr, so stdout carries only results)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    match config.season()? {
        Some(calc) => {
            info!("Calculating {} season for {}", calc.sport(), team_label(&config));
            if config.json {
                print_json(&calc.report(config.team.as_deref()))?;
            } else {
                print_summary(config.team.as_deref(), &calc);
            }
        }
        None => {
            info!("No scores given, running {} sample seasons", SAMPLE_SEASONS.len());
            if config.json {
                let reports: Vec<Report> = SAMPLE_SEASONS
                    .iter()
                    .map(|s| s.calculator().report(Some(s.team)))
                    .collect();
                print_json(&reports)?;
            } else {
                for (i, season) in SAMPLE_SEASONS.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print_summary(Some(season.team), &season.calculator());
                }
            }
        }
    }

    Ok(())
}

fn team_label(config: &Config) -> &str {
    config.team.as_deref().unwrap_or("unnamed team")
}

fn print_summary(team: Option<&str>, calc: &WinExpectancyCalculator) {
    match team {
        Some(team) => println!("{} = {}", team, calc),
        None => println!("{}", calc),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
