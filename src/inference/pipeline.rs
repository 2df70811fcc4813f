use std::fmt::Debug;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::inference::artifact::{self, ModelArtifact, ScalerArtifact};
use crate::inference::encoding::{encode_brand, encode_transmission};
use crate::inference::error::{Field, InferenceError};
use crate::inference::predictor::LinearPredictor;
use crate::inference::scaler::FeatureScaler;
use crate::inference::{FeatureVector, ModelVector, N_COEFFICIENTS};
use crate::prelude::*;

/// Unparsed input, exactly as submitted.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct RawInput {
    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub year: Option<String>,

    #[serde(default)]
    pub transmission: Option<String>,

    #[serde(default)]
    pub engine: Option<String>,

    #[serde(default)]
    pub max_power: Option<String>,
}

/// Parsed, still human-readable car attributes.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RawFeatures {
    pub brand: String,
    pub year: i32,
    pub transmission: String,
    pub engine: f64,
    pub max_power: f64,
}

impl TryFrom<&RawInput> for RawFeatures {
    type Error = InferenceError;

    fn try_from(input: &RawInput) -> Result<Self, Self::Error> {
        Ok(Self {
            brand: required(&input.brand, Field::Brand)?.to_string(),
            year: parse_year(required(&input.year, Field::Year)?)?,
            transmission: required(&input.transmission, Field::Transmission)?.to_string(),
            engine: parse_float(required(&input.engine, Field::Engine)?, Field::Engine)?,
            max_power: parse_float(required(&input.max_power, Field::MaxPower)?, Field::MaxPower)?,
        })
    }
}

impl RawFeatures {
    /// Builds the vector in the column order the scaler was fit with.
    pub fn encode(&self) -> Result<FeatureVector, InferenceError> {
        let brand = encode_brand(&self.brand)?;
        let transmission = encode_transmission(&self.transmission)?;
        Ok([
            f64::from(brand),
            self.engine,
            self.max_power,
            f64::from(transmission),
            f64::from(self.year),
        ])
    }
}

fn required(value: &Option<String>, field: Field) -> Result<&str, InferenceError> {
    value
        .as_deref()
        .map(str::trim)
        .ok_or_else(|| InferenceError::InvalidInput {
            field,
            reason: "the field is missing".to_string(),
        })
}

fn parse_year(value: &str) -> Result<i32, InferenceError> {
    i32::from_str(value).map_err(|_| InferenceError::InvalidInput {
        field: Field::Year,
        reason: format!("expected an integer, got '{}'", value),
    })
}

fn parse_float(value: &str, field: Field) -> Result<f64, InferenceError> {
    match f64::from_str(value) {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(InferenceError::InvalidInput {
            field,
            reason: format!("expected a finite number, got '{}'", value),
        }),
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Prediction {
    #[serde(flatten)]
    pub features: RawFeatures,

    /// Rounded to cents.
    pub predicted_price: f64,
}

/// Everything loaded at startup that a prediction needs. Immutable once built.
#[derive(Debug, Clone)]
pub struct Pipeline {
    scaler: FeatureScaler,
    predictor: LinearPredictor,
}

impl Pipeline {
    pub const fn new(scaler: FeatureScaler, predictor: LinearPredictor) -> Self {
        Self { scaler, predictor }
    }

    #[instrument(skip_all)]
    pub fn load(
        model_path: impl AsRef<Path> + Debug,
        scaler_path: impl AsRef<Path> + Debug,
    ) -> Result<Self> {
        let predictor = LinearPredictor::try_from(artifact::load::<ModelArtifact>(&model_path)?)
            .with_context(|| format!("invalid model artifact {:?}", model_path))?;
        let scaler = FeatureScaler::try_from(artifact::load::<ScalerArtifact>(&scaler_path)?)
            .with_context(|| format!("invalid scaler artifact {:?}", scaler_path))?;
        info!(regularization = ?predictor.regularization(), "loaded the model");
        Ok(Self::new(scaler, predictor))
    }

    /// Runs a single prediction. Any failure short-circuits before the later stages.
    #[instrument(level = "debug", skip_all)]
    pub fn predict(&self, input: &RawInput) -> Result<Prediction, InferenceError> {
        let features = RawFeatures::try_from(input)?;
        let encoded = features.encode()?;
        let log_price = self.log_price(&encoded);
        let price = log_price.exp();
        if !price.is_finite() {
            return Err(InferenceError::Computation(format!(
                "predicted log-price {} does not map to a finite price",
                log_price,
            )));
        }
        info!(?features.brand, features.year, price);
        Ok(Prediction {
            features,
            predicted_price: round_price(price),
        })
    }

    fn log_price(&self, encoded: &FeatureVector) -> f64 {
        debug!(?encoded);
        let scaled = self.scaler.scale(encoded);
        debug!(?scaled);
        let log_price = self.predictor.predict(&augment(&scaled));
        debug!(log_price);
        log_price
    }
}

/// Prepends the intercept term.
fn augment(x: &FeatureVector) -> ModelVector {
    let mut augmented = [1.0; N_COEFFICIENTS];
    augmented[1..].copy_from_slice(x);
    augmented
}

fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
