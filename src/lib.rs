pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod state;
pub mod storefront;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Config;
pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::coffee::list_coffee,
        handlers::coffee::get_coffee,
        handlers::orders::place_order,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::update_order_status,
        handlers::health::health,
    ),
    components(schemas(
        domain::catalog::CoffeeItem,
        domain::order::CustomerInfo,
        domain::order::CartItem,
        domain::order::OrderStatus,
        domain::order::Order,
        handlers::orders::CustomerRequest,
        handlers::orders::PlaceOrderRequest,
        handlers::orders::PlaceOrderResponse,
        handlers::orders::UpdateStatusRequest,
        handlers::orders::UpdateStatusResponse,
        handlers::health::HealthResponse,
        errors::ErrorBody,
    )),
    tags(
        (name = "coffee", description = "The café menu"),
        (name = "orders", description = "Order placement and status"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// All workers share one `AppState`, so orders placed through any worker are
/// visible to every other. The caller is responsible for `.await`-ing (or
/// `tokio::spawn`-ing) the returned server.
pub fn build_server(
    state: web::Data<AppState>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(handlers::configure)
            .default_service(web::to(handlers::route_not_found))
    })
    .bind((host.to_string(), port))?
    .run())
}
