//! CLI module for Fertilizer Advisor
//!
//! Provides subcommands for:
//! - `serve`: the form page and JSON API (default)
//! - `recommend`: one recommendation from command-line values
//! - `options`: the soil colors and crops the encoders know

pub mod recommend;
pub mod serve;

use clap::{Parser, Subcommand};

/// Fertilizer Advisor - Fertilizer recommendations from soil and crop data
#[derive(Parser)]
#[command(name = "fertilizer-advisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web form and JSON API (default mode)
    Serve,

    /// Print one recommendation for the given measurements
    Recommend(recommend::RecommendArgs),

    /// List the soil colors and crops known to the encoders
    Options(recommend::ArtifactArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["fertilizer-advisor"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::try_parse_from([
            "fertilizer-advisor",
            "recommend",
            "--soil-color",
            "Black",
            "--nitrogen",
            "80",
            "--ph",
            "6.5",
            "--temperature",
            "-5",
            "--crop",
            "Wheat",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Recommend(args)) => {
                let input = args.input();
                assert_eq!(input.soil_color, "Black");
                assert_eq!(input.nitrogen, 80.0);
                assert_eq!(input.phosphorus, 0.0);
                assert_eq!(input.temperature, -5.0);
                assert_eq!(input.crop, "Wheat");
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_parse_options_with_paths() {
        let cli = Cli::try_parse_from([
            "fertilizer-advisor",
            "options",
            "--soil-encoder",
            "demos/le_soil.json",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Command::Options(_))));
    }
}
