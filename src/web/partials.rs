use clap::crate_version;
use maud::{html, Markup, DOCTYPE};

pub use self::float::Float;

mod float;

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="https://unpkg.com/bulma-prefers-dark";
        link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.3/css/all.min.css" integrity="sha512-iBBXm8fW90+nuLcSKlbmrPcLa0OT92xO1BIsZ+ywDWZCvqsWgccV3gFoRBv0z+8dLJgyAHIhR35VZc2oM/gI1w==" crossorigin="anonymous" referrerpolicy="no-referrer";
    }
}

pub fn icon_text(class: &str, text: &str) -> Markup {
    html! {
        span.icon-text.is-flex-wrap-nowrap {
            span.icon { i class=(class) {} }
            span { (text) }
        }
    }
}

pub fn navbar() -> Markup {
    html! {
        nav.navbar.has-shadow role="navigation" aria-label="main navigation" {
            div.container {
                div.navbar-brand {
                    a.navbar-item href="/" {
                        (icon_text("fas fa-car has-text-info", "Car Price Prediction"))
                    }
                }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer.footer {
            div.content.has-text-centered {
                p {
                    "Car Price " (crate_version!())
                    " · estimates come from a linear regression model"
                }
            }
        }
    }
}

/// Complete HTML document with the common chrome around `content`.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { (title) }
            }
            body {
                (navbar())
                section.section {
                    div.container {
                        div.columns {
                            div.column."is-6"."is-offset-3" {
                                (content)
                            }
                        }
                    }
                }
                (footer())
            }
        }
    }
}
