use std::io::{stdout, Write};

use serde_json::json;

use crate::inference::{InferenceError, Pipeline, Prediction, RawInput};
use crate::opts::PredictOpts;
use crate::prelude::*;

/// Runs one prediction and prints it to stdout. A failed prediction is printed too,
/// and then returned as an error so that the process exits with a non-zero code.
pub fn run(pipeline: &Pipeline, opts: PredictOpts) -> Result {
    let result = pipeline.predict(&RawInput::from(opts));
    write_result(&result, stdout().lock())?;
    result.map(|_| ()).context("failed to predict the price")
}

fn write_result(
    result: &Result<Prediction, InferenceError>,
    mut writer: impl Write,
) -> Result {
    let output = match result {
        Ok(prediction) => serde_json::to_value(prediction)?,
        Err(error) => json!({ "error": error.to_string() }),
    };
    serde_json::to_writer_pretty(&mut writer, &output)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::inference::pipeline::tests::test_pipeline;

    fn toyota_opts() -> PredictOpts {
        PredictOpts {
            brand: "Toyota".to_string(),
            year: "2015".to_string(),
            transmission: "Manual".to_string(),
            engine: "1500".to_string(),
            max_power: "100".to_string(),
        }
    }

    #[test]
    fn write_prediction_ok() -> crate::Result {
        let result = test_pipeline().predict(&RawInput::from(toyota_opts()));
        let mut buffer = Vec::new();
        write_result(&result, &mut buffer)?;
        let output: Value = serde_json::from_slice(&buffer)?;
        assert_eq!(output["brand"], "Toyota");
        assert_eq!(output["year"], 2015);
        assert_eq!(output["predicted_price"], 475509.84);
        Ok(())
    }

    #[test]
    fn write_error_ok() -> crate::Result {
        let opts = PredictOpts {
            transmission: "CVT".to_string(),
            ..toyota_opts()
        };
        let result = test_pipeline().predict(&RawInput::from(opts));
        let mut buffer = Vec::new();
        write_result(&result, &mut buffer)?;
        let output: Value = serde_json::from_slice(&buffer)?;
        assert_eq!(output, json!({ "error": "transmission 'CVT' not recognized" }));
        Ok(())
    }

    #[test]
    fn run_ok() -> crate::Result {
        run(&test_pipeline(), toyota_opts())
    }

    #[test]
    fn run_fails_on_unknown_brand() {
        let opts = PredictOpts {
            brand: "UnknownBrand".to_string(),
            ..toyota_opts()
        };
        let error = run(&test_pipeline(), opts).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<InferenceError>(),
            Some(InferenceError::UnknownCategory { .. }),
        ));
    }
}
