use maud::{html, Markup};
use poem::handler;
use poem::web::Html;

use crate::inference::encoding::{brands, Transmission};
use crate::prelude::*;
use crate::web::partials::page;

#[handler]
#[instrument(skip_all)]
pub async fn get() -> Html<String> {
    Html(page("Car Price Prediction", prediction_form()).into_string())
}

fn prediction_form() -> Markup {
    html! {
        div.box {
            h1.title."is-4" { "Predict a car price" }
            form action="/predict" method="POST" {
                div.field {
                    label.label for="brand" { "Brand" }
                    div.control {
                        div.select.is-fullwidth {
                            select #brand name="brand" required {
                                @for brand in brands() {
                                    option value=(brand) { (brand) }
                                }
                            }
                        }
                    }
                }
                div.field {
                    label.label for="year" { "Year" }
                    div.control {
                        input.input #year type="number" name="year" min="1980" max="2030" step="1" placeholder="2015" required;
                    }
                }
                div.field {
                    label.label for="transmission" { "Transmission" }
                    div.control {
                        div.select.is-fullwidth {
                            select #transmission name="transmission" required {
                                @for transmission in Transmission::ALL {
                                    option value=(transmission.as_str()) { (transmission.as_str()) }
                                }
                            }
                        }
                    }
                }
                div.field {
                    label.label for="engine" { "Engine, CC" }
                    div.control {
                        input.input #engine type="number" name="engine" min="0" step="any" placeholder="1500" required;
                    }
                }
                div.field {
                    label.label for="max_power" { "Max power, bhp" }
                    div.control {
                        input.input #max_power type="number" name="max_power" min="0" step="any" placeholder="100" required;
                    }
                }
                div.field {
                    div.control {
                        button.button.is-link.is-fullwidth type="submit" { "Predict" }
                    }
                }
            }
        }
    }
}
