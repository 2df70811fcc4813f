use std::future::Future;
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

use crate::inference::Pipeline;
use crate::prelude::*;
use crate::web::middleware::{ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware};

mod middleware;
mod partials;
#[cfg(test)]
mod test;
mod views;

pub async fn run(host: &str, port: u16, pipeline: Arc<Pipeline>) -> Result {
    serve(host, port, pipeline, shutdown_signal()).await
}

#[instrument(skip_all, fields(host = host, port = port))]
async fn serve(
    host: &str,
    port: u16,
    pipeline: Arc<Pipeline>,
    signal: impl Future<Output = ()>,
) -> Result {
    let app = create_app(pipeline);
    info!("listening…");
    Server::new(TcpListener::bind((IpAddr::from_str(host)?, port)))
        .run_with_graceful_shutdown(app, signal, Some(SHUTDOWN_TIMEOUT))
        .await?;
    info!("stopped");
    Ok(())
}

/// In-flight requests get this long to finish after Ctrl+C.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down…"),
        Err(error) => error!("failed to listen for Ctrl+C: {:#}", error),
    }
}

pub fn create_app(pipeline: Arc<Pipeline>) -> impl Endpoint {
    Route::new()
        .at("/", get(views::index::get))
        .at("/predict", post(views::predict::post))
        .at("/api/predict", post(views::api::post_predict))
        .data(pipeline)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}
