pub mod coffee;
pub mod health;
pub mod orders;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::errors::{AppError, ErrorBody};

/// Wires every `/api` route onto `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .route("/health", web::get().to(health::health))
            .service(
                web::scope("/coffee")
                    .route("", web::get().to(coffee::list_coffee))
                    .route("/{id}", web::get().to(coffee::get_coffee)),
            )
            .service(
                web::scope("/orders")
                    .route("", web::post().to(orders::place_order))
                    .route("", web::get().to(orders::list_orders))
                    .route("/{id}", web::get().to(orders::get_order))
                    .route("/{id}", web::put().to(orders::update_order_status)),
            ),
    );
}

/// Malformed or mistyped JSON bodies become a 400 with the parser's message.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

/// Fallback for any route the API does not serve.
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody {
        error: "Route not found".to_string(),
    })
}

/// Path ids that are not numbers cannot name anything, so they read as 404.
fn parse_id<T: std::str::FromStr>(raw: &str, not_found: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}
