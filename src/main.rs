use simple_route_server::{
    config::ServerConfig, services::rest::server::RestServer, utils::logging::init_logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let rest_server = RestServer::new(&ServerConfig::default()).await?;
    rest_server.serve().await
}
