//! Car price inference: encode, scale, predict the log-price and invert it.

pub mod artifact;
pub mod encoding;
pub mod error;
pub mod pipeline;
pub mod predictor;
pub mod scaler;

pub use self::error::{Field, InferenceError};
pub use self::pipeline::{Pipeline, Prediction, RawInput};

pub const N_FEATURES: usize = 5;

/// Intercept plus one weight per feature.
pub const N_COEFFICIENTS: usize = N_FEATURES + 1;

/// Column order of the encoded feature vector.
pub const FEATURE_COLUMNS: [&str; N_FEATURES] = [
    Field::Brand.as_str(),
    Field::Engine.as_str(),
    Field::MaxPower.as_str(),
    Field::Transmission.as_str(),
    Field::Year.as_str(),
];

pub type FeatureVector = [f64; N_FEATURES];
pub type ModelVector = [f64; N_COEFFICIENTS];
