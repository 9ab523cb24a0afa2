//! Recommend and options commands - one-shot use of the artifacts from a shell

use std::path::PathBuf;

use clap::Args;

use crate::api::types::RecommendationResponse;
use crate::config::{AppConfig, ArtifactConfig};
use crate::domain::{FormOptions, Recommendation, RecommendationInput};
use crate::infrastructure::{artifact::load_artifacts, logging};

/// Artifact paths (override the configured ones)
#[derive(Args, Clone, Debug, Default)]
pub struct ArtifactArgs {
    /// Model artifact path
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Soil color encoder artifact path
    #[arg(long)]
    pub soil_encoder: Option<PathBuf>,

    /// Crop encoder artifact path
    #[arg(long)]
    pub crop_encoder: Option<PathBuf>,
}

impl ArtifactArgs {
    fn apply(&self, mut config: ArtifactConfig) -> ArtifactConfig {
        if let Some(path) = &self.model {
            config.model_path = path.clone();
        }
        if let Some(path) = &self.soil_encoder {
            config.soil_encoder_path = path.clone();
        }
        if let Some(path) = &self.crop_encoder {
            config.crop_encoder_path = path.clone();
        }
        config
    }
}

/// Arguments for the recommend command
#[derive(Args, Clone, Debug)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Soil color, one of the soil encoder's classes
    #[arg(long)]
    pub soil_color: String,

    /// Nitrogen (ppm)
    #[arg(long, default_value_t = 0.0)]
    pub nitrogen: f64,

    /// Phosphorus (ppm)
    #[arg(long, default_value_t = 0.0)]
    pub phosphorus: f64,

    /// Potassium (ppm)
    #[arg(long, default_value_t = 0.0)]
    pub potassium: f64,

    /// Soil pH, 0 to 14
    #[arg(long, default_value_t = 0.0)]
    pub ph: f64,

    /// Rainfall (mm)
    #[arg(long, default_value_t = 0.0)]
    pub rainfall: f64,

    /// Temperature (°C), at least -10
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Crop, one of the crop encoder's classes
    #[arg(long)]
    pub crop: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl RecommendArgs {
    pub fn input(&self) -> RecommendationInput {
        RecommendationInput {
            soil_color: self.soil_color.clone(),
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            ph: self.ph,
            rainfall: self.rainfall,
            temperature: self.temperature,
            crop: self.crop.clone(),
        }
    }
}

fn load_config(args: &ArtifactArgs) -> anyhow::Result<ArtifactConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    Ok(args.apply(config.artifacts))
}

/// Run the recommend command
pub fn run(args: RecommendArgs) -> anyhow::Result<()> {
    let config = load_config(&args.artifacts)?;
    let recommender = load_artifacts(&config)?.into_recommender();

    let recommendation = recommender.recommend(&args.input())?;

    if args.json {
        let response = RecommendationResponse::from(recommendation);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", format_recommendation(&recommendation));
    }

    Ok(())
}

/// Run the options command
pub fn options(args: ArtifactArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let recommender = load_artifacts(&config)?.into_recommender();

    println!("{}", format_options(&recommender.form_options()));

    Ok(())
}

fn format_recommendation(recommendation: &Recommendation) -> String {
    let advice = &recommendation.advice;
    let mut lines = vec![format!("Recommended Fertilizer: {}", recommendation.fertilizer)];

    match (advice.tip(), advice.image()) {
        (Some(tip), Some(image)) => {
            lines.push(tip.to_string());
            lines.push(format!("Image: {}", image));
        }
        _ => lines.extend(advice.fallback_message().map(str::to_string)),
    }

    lines.join("\n")
}

fn format_options(options: &FormOptions) -> String {
    format!(
        "Soil colors: {}\nCrops: {}",
        options.soil_colors.join(", "),
        options.crops.join(", ")
    )
}
