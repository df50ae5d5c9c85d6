use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderStatus};
use crate::domain::ports::OrderRepository;

// ── Storage ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Store {
    orders: Vec<Order>,
    next_id: u64,
}

/// Orders held in process memory. Everything is lost when the process exits.
///
/// The id counter lives under the same lock as the order list, so ids are
/// handed out strictly increasing even with several actix workers.
#[derive(Debug)]
pub struct InMemoryOrderRepository {
    store: Mutex<Store>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                orders: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, DomainError> {
        self.store
            .lock()
            .map_err(|e| DomainError::Internal(format!("order store lock poisoned: {e}")))
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

impl OrderRepository for InMemoryOrderRepository {
    fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut store = self.lock()?;

        let id = store.next_id;
        store.next_id += 1;

        let order = Order {
            id,
            customer: order.customer,
            items: order.items,
            total: order.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            updated_at: None,
        };
        store.orders.push(order.clone());

        Ok(order)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Order>, DomainError> {
        let store = self.lock()?;
        Ok(store.orders.iter().find(|o| o.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.lock()?.orders.clone())
    }

    fn update_status(&self, id: u64, status: OrderStatus) -> Result<Option<Order>, DomainError> {
        let mut store = self.lock()?;

        let Some(order) = store.orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        order.status = status;
        order.updated_at = Some(Utc::now());

        Ok(Some(order.clone()))
    }
}
