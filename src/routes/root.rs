use axum::Json;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct Greeting {
    message: &'static str,
}

pub async fn handler() -> Json<Greeting> {
    debug!("Root handler is run");
    Json(Greeting {
        message: "Hello World",
    })
}
