use crate::domain::catalog::{self, CoffeeItem};
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderDraft, OrderStatus};
use crate::domain::ports::OrderRepository;

pub const COFFEE_NOT_FOUND: &str = "Coffee item not found";
pub const ORDER_NOT_FOUND: &str = "Order not found";

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn catalog(&self) -> Vec<CoffeeItem> {
        catalog::coffee_items()
    }

    pub fn coffee_item(&self, id: u32) -> Result<CoffeeItem, DomainError> {
        catalog::find(id).ok_or(DomainError::NotFound(COFFEE_NOT_FOUND))
    }

    /// Validates the draft and records it as a new pending order.
    pub fn place_order(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let order = self.repo.create(NewOrder::try_from(draft)?)?;
        log::info!(
            "New order received - Order #{} for {} ({} line(s), total {})",
            order.id,
            order.customer.name,
            order.items.len(),
            order.total
        );
        Ok(order)
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list()
    }

    pub fn get_order(&self, id: u64) -> Result<Order, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound(ORDER_NOT_FOUND))
    }

    /// Existence is checked before the status value, so an unknown order
    /// reports 404 even when the status is also bad.
    pub fn update_status(&self, id: u64, status: Option<&str>) -> Result<Order, DomainError> {
        self.get_order(id)?;
        let status: OrderStatus = status.unwrap_or_default().parse()?;

        let order = self
            .repo
            .update_status(id, status)?
            .ok_or(DomainError::NotFound(ORDER_NOT_FOUND))?;
        log::info!("Order #{} is now {}", order.id, order.status);
        Ok(order)
    }
}
