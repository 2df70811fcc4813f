use maud::{html, Markup};
use poem::handler;
use poem::web::{Data, Form, Html};

use crate::inference::{InferenceError, Pipeline, Prediction, RawInput};
use crate::prelude::*;
use crate::web::partials::{page, Float};

/// Renders either the prediction or the reason there is none, always as a normal page.
#[handler]
#[instrument(skip_all)]
pub async fn post(
    Form(input): Form<RawInput>,
    Data(pipeline): Data<&Arc<Pipeline>>,
) -> Html<String> {
    let content = match pipeline.predict(&input) {
        Ok(prediction) => render_prediction(&prediction),
        Err(error) => {
            info!(field = ?error.field(), "{:#}", error);
            render_error(&error)
        }
    };
    Html(page("Predicted Car Price", content).into_string())
}

fn render_prediction(prediction: &Prediction) -> Markup {
    let features = &prediction.features;
    html! {
        div.box {
            h1.title."is-4" { "Predicted price" }
            p.subtitle."is-2".has-text-success {
                (Float::from(prediction.predicted_price).precision(2))
            }
            table.table.is-fullwidth.is-striped {
                tbody {
                    tr { th { "Brand" } td { (features.brand) } }
                    tr { th { "Year" } td { (features.year) } }
                    tr { th { "Transmission" } td { (features.transmission) } }
                    tr { th { "Engine" } td { (features.engine) " CC" } }
                    tr { th { "Max power" } td { (features.max_power) " bhp" } }
                }
            }
            (back_button())
        }
    }
}

fn render_error(error: &InferenceError) -> Markup {
    html! {
        div.notification.is-danger.is-light {
            p { strong { "Error: " } (error.to_string()) }
        }
        (back_button())
    }
}

fn back_button() -> Markup {
    html! {
        a.button.is-link.is-light href="/" { "Predict another" }
    }
}
