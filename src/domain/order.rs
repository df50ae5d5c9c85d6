use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::catalog::CoffeeItem;
use super::errors::DomainError;

pub const MISSING_CUSTOMER: &str = "Missing required customer information (name, email, address)";
pub const EMPTY_ITEMS: &str = "Order must contain at least one item";
pub const INVALID_QUANTITY: &str = "Every item must have a quantity of at least 1";
pub const INVALID_TOTAL: &str = "Invalid order total";
pub const INVALID_STATUS: &str = "Invalid status";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl CustomerInfo {
    /// Presence is the only check: no email or address format is enforced.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.address]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// A menu item together with the quantity ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: CoffeeItem,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(item: CoffeeItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn line_total(&self) -> BigDecimal {
        &self.item.price * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(INVALID_STATUS.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub customer: CustomerInfo,
    pub items: Vec<CartItem>,
    #[schema(value_type = String, example = "7.50")]
    #[serde(deserialize_with = "super::money::deserialize")]
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Order fields exactly as a client submitted them; anything may be missing.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub customer: Option<CustomerDraft>,
    pub items: Option<Vec<CartItem>>,
    pub total: Option<BigDecimal>,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// An order that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer: CustomerInfo,
    pub items: Vec<CartItem>,
    pub total: BigDecimal,
}

impl TryFrom<OrderDraft> for NewOrder {
    type Error = DomainError;

    fn try_from(draft: OrderDraft) -> Result<Self, Self::Error> {
        let invalid = |msg: &str| DomainError::InvalidInput(msg.to_string());

        let customer = draft
            .customer
            .map(|c| CustomerInfo {
                name: c.name.unwrap_or_default(),
                email: c.email.unwrap_or_default(),
                address: c.address.unwrap_or_default(),
            })
            .filter(CustomerInfo::is_complete)
            .ok_or_else(|| invalid(MISSING_CUSTOMER))?;

        let items = draft
            .items
            .filter(|items| !items.is_empty())
            .ok_or_else(|| invalid(EMPTY_ITEMS))?;
        if items.iter().any(|line| line.quantity == 0) {
            return Err(invalid(INVALID_QUANTITY));
        }

        let total = draft
            .total
            .filter(|total| *total > BigDecimal::from(0))
            .ok_or_else(|| invalid(INVALID_TOTAL))?;

        Ok(NewOrder {
            customer,
            items,
            total,
        })
    }
}
