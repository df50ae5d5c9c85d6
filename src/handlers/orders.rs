use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::parse_id;
use crate::application::order_service::ORDER_NOT_FOUND;
use crate::domain::money;
use crate::domain::order::{CartItem, CustomerDraft, Order, OrderDraft};
use crate::errors::{AppError, ErrorBody};
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Reads any JSON value, keeping it only when it is a string. Fields that
/// hold something else count as missing and get the domain's message.
fn text_or_none<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Every field is optional here so that missing ones surface as the
/// validation messages of the order domain instead of parser errors.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CustomerRequest {
    #[serde(default, deserialize_with = "text_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub address: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    pub customer: Option<CustomerRequest>,
    pub items: Option<Vec<CartItem>>,
    /// Decimal total, either a JSON number or a string such as "7.50"
    #[schema(value_type = Option<String>, example = "7.50")]
    #[serde(default, deserialize_with = "money::deserialize_option")]
    pub total: Option<BigDecimal>,
}

impl From<PlaceOrderRequest> for OrderDraft {
    fn from(req: PlaceOrderRequest) -> Self {
        OrderDraft {
            customer: req.customer.map(|c| CustomerDraft {
                name: c.name,
                email: c.email,
                address: c.address,
            }),
            items: req.items,
            total: req.total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub success: bool,
    pub message: String,
    pub order_id: u64,
    pub order: Order,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// One of pending, preparing, ready, completed, cancelled
    #[serde(default, deserialize_with = "text_or_none")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub message: String,
    pub order: Order,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/orders
///
/// Validates the customer, items and total, then records the order as
/// `pending` under the next id.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn place_order(
    state: web::Data<AppState>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order = state.orders.place_order(body.into_inner().into())?;

    Ok(HttpResponse::Created().json(PlaceOrderResponse {
        success: true,
        message: "Order placed successfully".to_string(),
        order_id: order.id,
        order,
    }))
}

/// GET /api/orders
///
/// Every order recorded since the process started, oldest first.
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders", body = [Order]),
        (status = 500, description = "Internal server error", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.orders.list_orders()?))
}

/// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = u64, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner(), ORDER_NOT_FOUND)?;
    Ok(HttpResponse::Ok().json(state.orders.get_order(id)?))
}

/// PUT /api/orders/{id}
///
/// Moves the order to a new status and stamps `updatedAt`. A body that is
/// missing or unreadable counts as an invalid status, which is only reported
/// once the order is known to exist.
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(
        ("id" = u64, Path, description = "Order id"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 400, description = "Invalid status", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Option<web::Json<UpdateStatusRequest>>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner(), ORDER_NOT_FOUND)?;
    let status = body.and_then(|b| b.into_inner().status);
    let order = state.orders.update_status(id, status.as_deref())?;

    Ok(HttpResponse::Ok().json(UpdateStatusResponse {
        success: true,
        message: "Order status updated".to_string(),
        order,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::handlers::{configure, route_not_found};
    use crate::state::AppState;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new()))
                    .configure(configure)
                    .default_service(web::to(route_not_found)),
            )
            .await
        };
    }

    fn order_body() -> Value {
        json!({
            "customer": {
                "name": "Ada",
                "email": "ada@example.com",
                "address": "1 Bean Street"
            },
            "items": [
                { "id": 1, "name": "Espresso", "price": 2.5,
                  "description": "Rich and bold espresso shot", "quantity": 2 }
            ],
            "total": "5.00"
        })
    }

    #[actix_web::test]
    async fn place_order_returns_201_with_incrementing_ids() {
        let app = app!();

        for expected in 1..=2u64 {
            let req = test::TestRequest::post()
                .uri("/api/orders")
                .set_json(order_body())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], true);
            assert_eq!(body["orderId"], expected);
            assert_eq!(body["order"]["id"], expected);
            assert_eq!(body["order"]["status"], "pending");
            assert_eq!(body["order"]["customer"]["name"], "Ada");
            assert!(body["order"]["createdAt"].is_string());
        }
    }

    #[actix_web::test]
    async fn place_order_without_email_is_400() {
        let app = app!();
        let mut body = order_body();
        body["customer"].as_object_mut().unwrap().remove("email");

        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Missing required customer information (name, email, address)"
        );
    }

    #[actix_web::test]
    async fn place_order_with_empty_items_is_400() {
        let app = app!();
        let mut body = order_body();
        body["items"] = json!([]);

        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Order must contain at least one item");
    }

    #[actix_web::test]
    async fn place_order_with_zero_total_is_400() {
        let app = app!();
        let mut body = order_body();
        body["total"] = json!(0);

        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_json_is_400() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn list_and_get_orders() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_body())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/orders").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get().uri("/api/orders/1").to_request();
        let order: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(order["id"], 1);
        assert_eq!(order["items"][0]["quantity"], 2);

        let req = test::TestRequest::get().uri("/api/orders/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_missing_order_is_404() {
        let app = app!();
        let req = test::TestRequest::put()
            .uri("/api/orders/41")
            .set_json(json!({ "status": "ready" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Order not found");
    }

    #[actix_web::test]
    async fn numeric_money_keeps_its_digits() {
        let app = app!();
        let mut body = order_body();
        body["items"][0]["price"] = json!(3.1);
        body["total"] = json!(8.1);

        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["order"]["total"], "8.1");
        assert_eq!(body["order"]["items"][0]["price"], "3.1");
    }

    #[actix_web::test]
    async fn non_string_customer_field_gets_validation_message() {
        let app = app!();
        let mut body = order_body();
        body["customer"]["name"] = json!(123);

        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Missing required customer information (name, email, address)"
        );
    }

    #[actix_web::test]
    async fn update_missing_order_without_readable_status_is_404() {
        let app = app!();

        let req = test::TestRequest::put().uri("/api/orders/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri("/api/orders/999")
            .set_json(json!({ "status": 5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Order not found");
    }

    #[actix_web::test]
    async fn update_existing_order_without_readable_status_is_400() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_body())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put().uri("/api/orders/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/api/orders/1")
            .set_json(json!({ "status": 5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid status");
    }

    #[actix_web::test]
    async fn update_with_bogus_status_is_400() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_body())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/orders/1")
            .set_json(json!({ "status": "bogus" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid status");
    }

    #[actix_web::test]
    async fn update_status_stamps_updated_at() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_body())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/orders/1")
            .set_json(json!({ "status": "preparing" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["order"]["status"], "preparing");
        assert!(body["order"]["updatedAt"].is_string());
    }

    #[actix_web::test]
    async fn unknown_coffee_is_404() {
        let app = app!();
        for uri in ["/api/coffee/999", "/api/coffee/latte"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Coffee item not found");
        }
    }

    #[actix_web::test]
    async fn coffee_menu_and_single_item() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/coffee").to_request();
        let menu: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(menu.as_array().unwrap().len(), 6);

        let req = test::TestRequest::get().uri("/api/coffee/2").to_request();
        let item: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(item["name"], "Cappuccino");
        assert_eq!(item["price"], "3.75");
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert!(body["uptime"].as_f64().unwrap() >= 0.0);
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn unknown_route_is_404_json() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/tea").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Route not found");
    }
}
