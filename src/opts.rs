//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::inference::RawInput;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Opts {
    /// Sentry DSN
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(long, env = "TRACES_SAMPLE_RATE", default_value = "0")]
    pub traces_sample_rate: f32,

    #[command(flatten)]
    pub artifacts: ArtifactOpts,

    #[command(subcommand)]
    pub subcommand: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Web(WebOpts),
    Predict(PredictOpts),
}

/// Trained artifacts, `.json` files are read as JSON and anything else as pickle
#[derive(Args)]
pub struct ArtifactOpts {
    /// Trained model artifact
    #[arg(long = "model", env = "MODEL_PATH", default_value = "models/A2_predicting_car_price.model")]
    pub model_path: PathBuf,

    /// Fitted feature scaler artifact
    #[arg(long = "scaler", env = "SCALER_PATH", default_value = "models/scaler.pkl")]
    pub scaler_path: PathBuf,
}

/// Runs the web application
#[derive(Args)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, env = "PORT", default_value = "5001")]
    pub port: u16,
}

/// Predicts a single price and prints it as JSON
#[derive(Args)]
pub struct PredictOpts {
    /// Car brand, for example `Toyota`
    #[arg(long)]
    pub brand: String,

    /// Manufacturing year
    #[arg(long)]
    pub year: String,

    /// `Manual` or `Automatic`
    #[arg(long)]
    pub transmission: String,

    /// Engine displacement in CC
    #[arg(long)]
    pub engine: String,

    /// Maximum power in BHP
    #[arg(long)]
    pub max_power: String,
}

impl From<PredictOpts> for RawInput {
    fn from(opts: PredictOpts) -> Self {
        Self {
            brand: Some(opts.brand),
            year: Some(opts.year),
            transmission: Some(opts.transmission),
            engine: Some(opts.engine),
            max_power: Some(opts.max_power),
        }
    }
}
