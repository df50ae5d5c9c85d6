use std::time::{Duration, Instant};

use crate::application::OrderService;
use crate::infrastructure::InMemoryOrderRepository;

/// Shared across all actix workers through `web::Data`.
pub struct AppState {
    pub orders: OrderService<InMemoryOrderRepository>,
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            orders: OrderService::new(InMemoryOrderRepository::new()),
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
