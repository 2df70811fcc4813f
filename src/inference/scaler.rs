use crate::inference::artifact::ScalerArtifact;
use crate::inference::error::InferenceError;
use crate::inference::{FeatureVector, FEATURE_COLUMNS, N_FEATURES};
use crate::prelude::*;

/// Per-column standardization fit alongside the model.
///
/// Column order follows [`FEATURE_COLUMNS`]. Nothing here can tell a permuted vector
/// from a correct one, so callers build the vector in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScaler {
    mean: FeatureVector,
    scale: FeatureVector,
}

impl FeatureScaler {
    pub fn new(mean: FeatureVector, scale: FeatureVector) -> Result<Self> {
        for (i, (mean, scale)) in mean.iter().zip(&scale).enumerate() {
            let column = FEATURE_COLUMNS[i];
            ensure!(mean.is_finite(), "mean of `{}` is not finite", column);
            ensure!(
                scale.is_finite() && *scale != 0.0,
                "scale of `{}` must be finite and non-zero, got {}",
                column,
                scale,
            );
        }
        Ok(Self { mean, scale })
    }

    /// Applies `(x - mean) / scale` column-wise.
    #[must_use]
    pub fn scale(&self, x: &FeatureVector) -> FeatureVector {
        let mut scaled = [0.0; N_FEATURES];
        for (i, xi) in x.iter().enumerate() {
            scaled[i] = (xi - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}

impl TryFrom<ScalerArtifact> for FeatureScaler {
    type Error = anyhow::Error;

    fn try_from(artifact: ScalerArtifact) -> Result<Self> {
        let (mean, scale) = match (artifact.mean, artifact.scale) {
            (Some(mean), Some(scale)) => (mean, scale),
            _ => return Err(InferenceError::ScalerNotLoaded.into()),
        };
        if let Some(feature_names) = artifact.feature_names {
            ensure!(
                feature_names.iter().map(String::as_str).eq(FEATURE_COLUMNS),
                "scaler was fit on columns {:?}, expected {:?}",
                feature_names,
                FEATURE_COLUMNS,
            );
        }
        let mean = FeatureVector::try_from(mean.as_slice()).map_err(|_| {
            anyhow!("scaler mean has {} columns, expected {}", mean.len(), N_FEATURES)
        })?;
        let scale = FeatureVector::try_from(scale.as_slice()).map_err(|_| {
            anyhow!("scaler scale has {} columns, expected {}", scale.len(), N_FEATURES)
        })?;
        Self::new(mean, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_ok() -> crate::Result {
        let scaler = FeatureScaler::new([1.0, 2.0, 3.0, 4.0, 5.0], [1.0, 2.0, 4.0, 0.5, 2.0])?;
        assert_eq!(scaler.scale(&[1.0, 4.0, 1.0, 5.0, 5.0]), [0.0, 1.0, -0.5, 2.0, 0.0]);
        Ok(())
    }

    #[test]
    fn zero_scale_fails() {
        assert!(FeatureScaler::new([0.0; N_FEATURES], [1.0, 1.0, 0.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn missing_parameters_fail() {
        let artifact = ScalerArtifact {
            mean: Some(vec![0.0; N_FEATURES]),
            scale: None,
            feature_names: None,
        };
        let error = FeatureScaler::try_from(artifact).unwrap_err();
        assert_eq!(error.downcast_ref::<InferenceError>(), Some(&InferenceError::ScalerNotLoaded));
    }

    #[test]
    fn wrong_column_count_fails() {
        let artifact = ScalerArtifact {
            mean: Some(vec![0.0; 4]),
            scale: Some(vec![1.0; 4]),
            feature_names: None,
        };
        assert!(FeatureScaler::try_from(artifact).is_err());
    }

    #[test]
    fn permuted_feature_names_fail() {
        let artifact = ScalerArtifact {
            mean: Some(vec![0.0; N_FEATURES]),
            scale: Some(vec![1.0; N_FEATURES]),
            feature_names: Some(
                ["brand", "year", "transmission", "engine", "max_power"]
                    .map(String::from)
                    .to_vec(),
            ),
        };
        assert!(FeatureScaler::try_from(artifact).is_err());
    }

    #[test]
    fn matching_feature_names_ok() -> crate::Result {
        let artifact = ScalerArtifact {
            mean: Some(vec![0.0; N_FEATURES]),
            scale: Some(vec![1.0; N_FEATURES]),
            feature_names: Some(FEATURE_COLUMNS.map(String::from).to_vec()),
        };
        FeatureScaler::try_from(artifact)?;
        Ok(())
    }
}
