use actix_web::{web, HttpResponse};

use super::parse_id;
use crate::application::order_service::COFFEE_NOT_FOUND;
use crate::domain::catalog::CoffeeItem;
use crate::errors::{AppError, ErrorBody};
use crate::state::AppState;

/// GET /api/coffee
///
/// The full menu, in display order.
#[utoipa::path(
    get,
    path = "/api/coffee",
    responses(
        (status = 200, description = "All coffee items", body = [CoffeeItem]),
    ),
    tag = "coffee"
)]
pub async fn list_coffee(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.orders.catalog())
}

/// GET /api/coffee/{id}
#[utoipa::path(
    get,
    path = "/api/coffee/{id}",
    params(
        ("id" = u32, Path, description = "Menu item id"),
    ),
    responses(
        (status = 200, description = "Coffee item found", body = CoffeeItem),
        (status = 404, description = "Coffee item not found", body = ErrorBody),
    ),
    tag = "coffee"
)]
pub async fn get_coffee(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner(), COFFEE_NOT_FOUND)?;
    let item = state.orders.coffee_item(id)?;
    Ok(HttpResponse::Ok().json(item))
}
