//! Backend commands queued from UI to backend worker.

use shared::{
    domain::OrderId,
    protocol::{CreateOrderRequest, UpdateOrderRequest},
};

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    FetchOrders,
    FetchOrdersByWaiter {
        waiter: String,
    },
    CreateOrder {
        request: CreateOrderRequest,
    },
    UpdateOrder {
        order_id: OrderId,
        request: UpdateOrderRequest,
    },
    UpdateWaiter {
        order_id: OrderId,
        server: String,
    },
    DeleteOrder {
        order_id: OrderId,
    },
}
