//! Persisted model and scaler documents, as written by the training job.

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::inference::predictor::Regularization;
use crate::prelude::*;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ModelArtifact {
    #[serde(default)]
    pub theta: Option<Coefficients>,

    #[serde(default)]
    pub regularization: Regularization,
}

/// The trainer keeps `theta` as an `(n, 1)` column; a flat list is accepted too.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Coefficients {
    Flat(Vec<f64>),
    Column(Vec<Vec<f64>>),
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ScalerArtifact {
    #[serde(default, alias = "mean_")]
    pub mean: Option<Vec<f64>>,

    #[serde(default, alias = "scale_")]
    pub scale: Option<Vec<f64>>,

    #[serde(default, alias = "feature_names_in_")]
    pub feature_names: Option<Vec<String>>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    Json,
    Pickle,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pickle,
        }
    }
}

pub fn from_slice<T: DeserializeOwned>(bytes: &[u8], format: Format) -> Result<T> {
    let artifact = match format {
        Format::Json => serde_json::from_slice(bytes)?,
        Format::Pickle => serde_pickle::from_slice(bytes, Default::default())?,
    };
    Ok(artifact)
}

#[instrument(level = "info", skip_all, fields(path = ?path))]
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path> + Debug) -> Result<T> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    let format = Format::from_path(path);
    debug!(?format, n_bytes = bytes.len());
    from_slice(&bytes, format).with_context(|| format!("failed to parse `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path_ok() {
        assert_eq!(Format::from_path(Path::new("models/scaler.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("models/scaler.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("models/scaler.pkl")), Format::Pickle);
        assert_eq!(Format::from_path(Path::new("models/car_price.model")), Format::Pickle);
        assert_eq!(Format::from_path(Path::new("models/scaler")), Format::Pickle);
    }

    #[test]
    fn parse_json_model_ok() -> crate::Result {
        let artifact: ModelArtifact = from_slice(
            // language=JSON
            br#"{"theta": [[1.0], [2.0], [3.0], [4.0], [5.0], [6]], "regularization": {"kind": "ridge", "lambda": 0.5}}"#,
            Format::Json,
        )?;
        assert_eq!(
            artifact.theta,
            Some(Coefficients::Column(vec![
                vec![1.0],
                vec![2.0],
                vec![3.0],
                vec![4.0],
                vec![5.0],
                vec![6.0],
            ])),
        );
        assert_eq!(artifact.regularization, Regularization::Ridge { lambda: 0.5 });
        Ok(())
    }

    #[test]
    fn parse_json_model_without_theta_ok() -> crate::Result {
        let artifact: ModelArtifact = from_slice(br#"{}"#, Format::Json)?;
        assert_eq!(artifact.theta, None);
        assert_eq!(artifact.regularization, Regularization::None);
        Ok(())
    }

    #[test]
    fn parse_sklearn_scaler_ok() -> crate::Result {
        let artifact: ScalerArtifact = from_slice(
            // language=JSON
            br#"{"mean_": [1, 2, 3, 4, 5], "scale_": [0.5, 0.5, 0.5, 0.5, 0.5]}"#,
            Format::Json,
        )?;
        assert_eq!(artifact.mean, Some(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
        assert_eq!(artifact.scale, Some(vec![0.5; 5]));
        assert_eq!(artifact.feature_names, None);
        Ok(())
    }

    #[test]
    fn parse_pickled_scaler_ok() -> crate::Result {
        let expected = ScalerArtifact {
            mean: Some(vec![15.0, 1450.0, 90.0, 0.8, 2014.0]),
            scale: Some(vec![8.0, 500.0, 35.0, 0.4, 4.0]),
            feature_names: None,
        };
        let bytes = serde_pickle::to_vec(&expected, Default::default())?;
        let artifact: ScalerArtifact = from_slice(&bytes, Format::Pickle)?;
        assert_eq!(artifact.mean, expected.mean);
        assert_eq!(artifact.scale, expected.scale);
        Ok(())
    }

    #[test]
    fn parse_garbage_fails() {
        assert!(from_slice::<ModelArtifact>(b"not a pickle", Format::Pickle).is_err());
        assert!(from_slice::<ModelArtifact>(b"not json", Format::Json).is_err());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load::<ModelArtifact>("does/not/exist.model").is_err());
    }
}
