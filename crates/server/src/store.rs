use std::sync::Arc;

use shared::{
    domain::{Order, OrderId},
    protocol::{CreateOrderRequest, UpdateOrderRequest},
};
use tokio::sync::RwLock;

/// In-memory order collection. Orders keep insertion order; ids are assigned
/// here and never by callers.
#[derive(Clone, Default)]
pub struct OrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    pub async fn get(&self, id: &OrderId) -> Option<Order> {
        self.orders
            .read()
            .await
            .iter()
            .find(|order| &order.id == id)
            .cloned()
    }

    pub async fn list_for_waiter(&self, waiter: &str) -> Vec<Order> {
        self.orders
            .read()
            .await
            .iter()
            .filter(|order| order.server == waiter)
            .cloned()
            .collect()
    }

    pub async fn insert(&self, request: CreateOrderRequest) -> Order {
        let order = Order {
            id: OrderId::random(),
            dish: request.dish,
            server: request.server,
            table: request.table,
            price: request.price,
        };
        self.orders.write().await.push(order.clone());
        order
    }

    pub async fn replace(&self, id: &OrderId, request: UpdateOrderRequest) -> Option<Order> {
        let mut orders = self.orders.write().await;
        let slot = orders.iter_mut().find(|order| &order.id == id)?;
        *slot = request.into_order(id.clone());
        Some(slot.clone())
    }

    pub async fn update_waiter(&self, id: &OrderId, waiter: &str) -> Option<Order> {
        let mut orders = self.orders.write().await;
        let slot = orders.iter_mut().find(|order| &order.id == id)?;
        slot.server = waiter.to_string();
        Some(slot.clone())
    }

    pub async fn delete(&self, id: &OrderId) -> bool {
        let mut orders = self.orders.write().await;
        let before = orders.len();
        orders.retain(|order| &order.id != id);
        orders.len() != before
    }
}
