//! Bridges Lambda invocations to the axum application.
//!
//! The raw payload is decoded into one of the HTTP event shapes understood by
//! `lambda_http` (API Gateway REST, API Gateway HTTP API or ALB). The matching
//! response envelope is produced for whichever shape came in.

use std::convert::Infallible;
use std::env;

use axum::Router;
use lambda_http::{request::LambdaRequest, Adapter, Error, LambdaEvent};
use serde_json::Value;
use tower::ServiceExt;
use tracing::{debug, error};

use crate::error::AppError;

/// Makes `lambda_http` drop the API Gateway stage segment (`/prod/...`) from
/// request paths, so `/` routes the same on every stage.
///
/// Mutates the process environment, so call it from `main` before the tokio
/// runtime (and its worker threads) is built.
pub fn ignore_stage_in_path() {
    env::set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");
}

/// Handles a single invocation.
///
/// A payload that is not an HTTP event fails this invocation only, the
/// runtime reports the error back to the platform and keeps polling.
pub async fn dispatch(app: Router, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let context = event.context;
    debug!(request_id = %context.request_id, "invocation received");

    let request: LambdaRequest = serde_json::from_value(event.payload).map_err(|e| {
        error!(request_id = %context.request_id, "unsupported invocation event: {e}");
        AppError::InvalidEvent(e)
    })?;

    let response = Adapter::from(app)
        .oneshot(LambdaEvent::new(request, context))
        .await
        .unwrap_or_else(|never: Infallible| match never {});

    let envelope = serde_json::to_value(response).map_err(AppError::Encode)?;
    Ok(envelope)
}
