use serde::{Deserialize, Serialize};

use crate::domain::{Order, OrderId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub server: String,
    pub dish: String,
    pub table: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    pub dish: String,
    pub server: String,
    pub table: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWaiterRequest {
    pub server: String,
}

impl UpdateOrderRequest {
    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            dish: self.dish,
            server: self.server,
            table: self.table,
            price: self.price,
        }
    }
}
