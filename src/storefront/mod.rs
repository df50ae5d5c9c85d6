//! The customer-facing side: a local cart, the customer details form and a
//! single checkout call against the API.

pub mod cart;
pub mod client;

use bigdecimal::BigDecimal;
use thiserror::Error;

use crate::domain::catalog::CoffeeItem;
use crate::domain::order::CustomerInfo;

pub use cart::Cart;
pub use client::{StorefrontClient, DEFAULT_API_URL};

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Please fill in all customer information")]
    IncompleteCustomer,

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Coffee item {0} is not on the menu")]
    UnknownItem(u32),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Could not reach the coffee shop: {0}")]
    Http(#[from] reqwest::Error),
}

/// Which field of the customer form a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Address,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    info: CustomerInfo,
}

impl CustomerForm {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.info.name,
            Field::Email => &mut self.info.email,
            Field::Address => &mut self.info.address,
        };
        *slot = value.into();
    }

    pub fn is_complete(&self) -> bool {
        self.info.is_complete()
    }

    pub fn info(&self) -> &CustomerInfo {
        &self.info
    }

    pub fn clear(&mut self) {
        self.info = CustomerInfo::default();
    }
}

/// What the customer is told after a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order_id: u64,
    pub total: BigDecimal,
}

/// Cart, form and API client held together for one shopping session.
#[derive(Debug)]
pub struct Storefront {
    client: StorefrontClient,
    menu: Vec<CoffeeItem>,
    pub cart: Cart,
    pub customer: CustomerForm,
}

impl Storefront {
    /// Starts a session with the menu already fetched.
    pub async fn open(client: StorefrontClient) -> Result<Self, StorefrontError> {
        let menu = client.menu().await?;
        Ok(Self::with_menu(client, menu))
    }

    pub fn with_menu(client: StorefrontClient, menu: Vec<CoffeeItem>) -> Self {
        Self {
            client,
            menu,
            cart: Cart::new(),
            customer: CustomerForm::default(),
        }
    }

    pub fn menu(&self) -> &[CoffeeItem] {
        &self.menu
    }

    /// Adds one of menu item `id` to the cart.
    pub fn add_to_cart(&mut self, id: u32) -> Result<(), StorefrontError> {
        let item = self
            .menu
            .iter()
            .find(|item| item.id == id)
            .ok_or(StorefrontError::UnknownItem(id))?;
        self.cart.add(item);
        Ok(())
    }

    /// Checks the form and cart locally, then posts the order once.
    ///
    /// On success the cart and form are reset; on failure both are left
    /// untouched so the customer can try again.
    pub async fn checkout(&mut self) -> Result<Receipt, StorefrontError> {
        if !self.customer.is_complete() {
            return Err(StorefrontError::IncompleteCustomer);
        }
        if self.cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        let total = self.cart.total_price();
        let placed = self
            .client
            .place_order(&self.cart, self.customer.info())
            .await?;
        log::debug!("Order response: {:?}", placed);

        self.cart.clear();
        self.customer.clear();

        Ok(Receipt {
            order_id: placed.order_id,
            total,
        })
    }
}
