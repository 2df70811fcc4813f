#![warn(clippy::all)]

use clap::Parser;

use crate::inference::Pipeline;
use crate::opts::{Command, Opts};
use crate::prelude::*;

mod helpers;
mod inference;
mod opts;
mod predict;
mod prelude;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = helpers::tracing::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let pipeline = Pipeline::load(&opts.artifacts.model_path, &opts.artifacts.scaler_path)
        .context("failed to load the trained artifacts")?;

    let result = match opts.subcommand {
        Command::Web(opts) => web::run(&opts.host, opts.port, Arc::new(pipeline)).await,
        Command::Predict(opts) => predict::run(&pipeline, opts),
    };
    if let Err(error) = &result {
        error!("fatal error: {:#}", error);
    }
    result
}
