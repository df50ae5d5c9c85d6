use super::errors::DomainError;
use super::order::{NewOrder, Order, OrderStatus};

pub trait OrderRepository: Send + Sync + 'static {
    /// Stores the order under the next id and returns it as recorded.
    fn create(&self, order: NewOrder) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: u64) -> Result<Option<Order>, DomainError>;
    fn list(&self) -> Result<Vec<Order>, DomainError>;
    /// Returns `None` when no order has `id`.
    fn update_status(&self, id: u64, status: OrderStatus) -> Result<Option<Order>, DomainError>;
}
