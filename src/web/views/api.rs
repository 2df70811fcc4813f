use poem::http::StatusCode;
use poem::web::{Data, Form, Json};
use poem::{handler, IntoResponse, Response};
use serde_json::json;

use crate::inference::{Pipeline, RawInput};
use crate::prelude::*;

#[handler]
#[instrument(level = "info", skip_all)]
pub async fn post_predict(
    Form(input): Form<RawInput>,
    Data(pipeline): Data<&Arc<Pipeline>>,
) -> Response {
    match pipeline.predict(&input) {
        Ok(prediction) => Json(prediction).into_response(),
        Err(error) => {
            info!(field = ?error.field(), "{:#}", error);
            Json(json!({ "error": error.to_string() }))
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::Value;

    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn post_predict_ok() -> crate::Result {
        let response = create_test_client()
            .post("/api/predict")
            .form(&vec![
                ("brand", "Toyota"),
                ("year", "2015"),
                ("transmission", "Manual"),
                ("engine", "1500"),
                ("max_power", "100"),
            ])
            .send()
            .await;
        response.assert_status_is_ok();
        let body: Value = serde_json::from_str(&response.0.into_body().into_string().await?)?;
        assert_eq!(body["brand"], "Toyota");
        assert_eq!(body["year"], 2015);
        assert_eq!(body["transmission"], "Manual");
        assert_eq!(body["engine"], 1500.0);
        assert_eq!(body["max_power"], 100.0);
        assert_eq!(body["predicted_price"], 475509.84);
        Ok(())
    }

    #[tokio::test]
    async fn post_predict_unknown_brand_ok() -> crate::Result {
        let response = create_test_client()
            .post("/api/predict")
            .form(&vec![
                ("brand", "UnknownBrand"),
                ("year", "2015"),
                ("transmission", "Manual"),
                ("engine", "1500"),
                ("max_power", "100"),
            ])
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_str(&response.0.into_body().into_string().await?)?;
        assert_eq!(body, serde_json::json!({ "error": "brand 'UnknownBrand' not recognized" }));
        Ok(())
    }
}
