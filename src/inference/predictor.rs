use serde::{Deserialize, Serialize};

use crate::inference::artifact::{Coefficients, ModelArtifact};
use crate::inference::error::InferenceError;
use crate::inference::{ModelVector, N_COEFFICIENTS};
use crate::prelude::*;

/// Penalty the model was trained with. Never evaluated while serving.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Regularization {
    #[default]
    None,
    Lasso {
        lambda: f64,
    },
    Ridge {
        lambda: f64,
    },
}

/// Linear model over the intercept-augmented feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPredictor {
    theta: ModelVector,
    regularization: Regularization,
}

impl LinearPredictor {
    pub fn new(theta: ModelVector, regularization: Regularization) -> Result<Self> {
        ensure!(
            theta.iter().all(|weight| weight.is_finite()),
            "theta contains non-finite weights: {:?}",
            theta,
        );
        Ok(Self {
            theta,
            regularization,
        })
    }

    #[must_use]
    pub const fn regularization(&self) -> Regularization {
        self.regularization
    }

    #[must_use]
    pub fn predict(&self, x: &ModelVector) -> f64 {
        dot(x, &self.theta)
    }
}

impl TryFrom<ModelArtifact> for LinearPredictor {
    type Error = anyhow::Error;

    fn try_from(artifact: ModelArtifact) -> Result<Self> {
        let theta = match artifact.theta {
            Some(theta) => theta.into_vec()?,
            None => return Err(InferenceError::ModelNotTrained.into()),
        };
        let theta = ModelVector::try_from(theta.as_slice()).map_err(|_| {
            anyhow!("theta has {} weights, expected {}", theta.len(), N_COEFFICIENTS)
        })?;
        Self::new(theta, artifact.regularization)
    }
}

impl Coefficients {
    fn into_vec(self) -> Result<Vec<f64>> {
        match self {
            Self::Flat(theta) => Ok(theta),
            Self::Column(rows) => rows
                .into_iter()
                .map(|row| match row.as_slice() {
                    [weight] => Ok(*weight),
                    _ => Err(anyhow!("theta must be a column vector, got a row of {}", row.len())),
                })
                .collect(),
        }
    }
}

#[must_use]
#[inline]
fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).fold(0.0, |dot, (xi, yi)| dot + xi * yi)
}
