pub mod adapter;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;

use axum::{middleware::from_fn, routing::get, Router};
use lambda_http::{lambda_runtime, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

use crate::config::Config;
use crate::middleware::{handle_panic, log_request};
use crate::routes::{fallback, root};

pub fn create_app() -> Router {
    with_layers(app_routes())
}

/// The routes and fallbacks, without any middleware.
pub fn app_routes() -> Router {
    Router::new()
        .route(
            "/",
            get(root::handler).fallback(fallback::method_not_allowed),
        )
        .fallback(fallback::not_found)
}

/// Wraps every route already on `router` with request logging and the
/// panic-to-500 layer. Routes added afterwards are not covered.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(from_fn(log_request))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Serves invocations until the runtime shuts down.
///
/// The stage-prefix policy in `config` has to be applied by the caller
/// before the tokio runtime exists, see `adapter::ignore_stage_in_path`.
pub async fn run_app(config: Config) -> Result<(), Error> {
    logging::init_logger(&config);
    info!(
        environment = %config.environment,
        strip_stage_prefix = config.strip_stage_prefix,
        "starting greeting-api"
    );

    let app = create_app();
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        adapter::dispatch(app.clone(), event)
    }))
    .await
}
