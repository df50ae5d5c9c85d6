use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use super::cart::Cart;
use super::StorefrontError;
use crate::domain::catalog::CoffeeItem;
use crate::domain::order::{CartItem, CustomerInfo, Order};
use crate::errors::ErrorBody;
use crate::handlers::orders::{PlaceOrderResponse, UpdateStatusResponse};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Serialize)]
struct OrderPayload<'a> {
    customer: &'a CustomerInfo,
    items: &'a [CartItem],
    /// Sent as a two-place decimal string, e.g. "8.75".
    total: String,
}

/// Thin JSON client for the café API. One request per call: no retries,
/// no timeouts beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: Client,
    base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn menu(&self) -> Result<Vec<CoffeeItem>, StorefrontError> {
        let resp = self.http.get(self.url("/coffee")).send().await?;
        decode(resp).await
    }

    pub async fn coffee(&self, id: u32) -> Result<CoffeeItem, StorefrontError> {
        let resp = self.http.get(self.url(&format!("/coffee/{id}"))).send().await?;
        decode(resp).await
    }

    pub async fn place_order(
        &self,
        cart: &Cart,
        customer: &CustomerInfo,
    ) -> Result<PlaceOrderResponse, StorefrontError> {
        let payload = OrderPayload {
            customer,
            items: cart.items(),
            total: cart.total_price().to_string(),
        };
        let resp = self
            .http
            .post(self.url("/orders"))
            .json(&payload)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, StorefrontError> {
        let resp = self.http.get(self.url("/orders")).send().await?;
        decode(resp).await
    }

    pub async fn order(&self, id: u64) -> Result<Order, StorefrontError> {
        let resp = self.http.get(self.url(&format!("/orders/{id}"))).send().await?;
        decode(resp).await
    }

    /// `status` is passed through verbatim so the server decides validity.
    pub async fn update_status(&self, id: u64, status: &str) -> Result<Order, StorefrontError> {
        let resp = self
            .http
            .put(self.url(&format!("/orders/{id}")))
            .json(&json!({ "status": status }))
            .send()
            .await?;
        let updated: UpdateStatusResponse = decode(resp).await?;
        Ok(updated.order)
    }
}

/// Successful bodies decode into `T`; anything else becomes an `Api` error
/// carrying the server's `error` text.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, StorefrontError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string(),
    };
    Err(StorefrontError::Api {
        status: status.as_u16(),
        message,
    })
}
