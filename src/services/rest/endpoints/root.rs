use axum::{routing::get, Json, Router};
use tracing::info;

use crate::services::rest::payloads::message::Message;

pub fn get_routes() -> Router {
    Router::new().route("/", get(root))
}

pub async fn root() -> Json<Message> {
    info!("Request was accepted");
    Json(Message::root())
}
