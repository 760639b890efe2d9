use crate::{config::ServerConfig, services::rest::endpoints::root};
use anyhow::Context;
use axum::{serve::Serve, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

/// HTTP responder serving the static root route.
pub struct RestServer {
    serve: Serve<Router, Router>,
    pub local_port: u16,
}

impl RestServer {
    /// Binds the listener. Fails if the address is already in use.
    pub async fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let router = Self::build_router();
        let address = config.socket_addr();

        let listener = tokio::net::TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind address {}", address))?;

        let local_port = listener
            .local_addr()
            .context("Cannot get local port")?
            .port();

        Ok(RestServer {
            serve: axum::serve(listener, router),
            local_port,
        })
    }

    pub fn local_port(&self) -> u16 {
        self.local_port
    }

    /// Serves until the process is killed.
    pub async fn serve(self) -> anyhow::Result<()> {
        info!("Server running on port {}", self.local_port());

        self.serve.await.context("HTTP Server error")?;

        Ok(())
    }

    pub fn build_router() -> Router {
        with_default_layers(Router::new().merge(root::get_routes()))
    }
}

// Access log and panic recovery, nothing route specific.
fn with_default_layers(router: Router) -> Router {
    router.layer(CatchPanicLayer::new()).layer(
        TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    use super::*;

    async fn explode() -> &'static str {
        panic!("handler failure")
    }

    #[tokio::test]
    async fn panicking_handler_yields_internal_server_error() {
        let router = with_default_layers(Router::new().route("/explode", get(explode)));

        let response = router
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn binds_requested_port() {
        let config = ServerConfig::new(std::net::Ipv4Addr::LOCALHOST.into(), 0);
        let server = RestServer::new(&config).await.unwrap();
        assert_ne!(server.local_port(), 0);
    }
}
