use actix_web::web;
use coffee_shop::{build_server, AppState, Config};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    log::info!(
        "Coffee Shop API server is running at http://{}:{}",
        config.host,
        config.port
    );
    log::info!(
        "Health check: http://localhost:{}/api/health",
        config.port
    );

    build_server(web::Data::new(AppState::new()), &config.host, config.port)?.await
}
