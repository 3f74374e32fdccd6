//! Reducer-like view state for the order list and its three dialogs.
//!
//! All network effects are expressed as returned [`BackendCommand`]s; nothing
//! in here touches a socket, which is what keeps the dialog state machines
//! and the stale/refetch protocol testable without a UI or a server.

use shared::{
    domain::{Order, OrderId},
    protocol::{CreateOrderRequest, UpdateOrderRequest},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct DialogTarget {
    pub open: bool,
    pub target: Option<OrderId>,
}

impl DialogTarget {
    fn closed() -> Self {
        Self {
            open: false,
            target: None,
        }
    }

    fn open_for(target: OrderId) -> Self {
        Self {
            open: true,
            target: Some(target),
        }
    }
}

/// Scratch text buffers for the create and change-order forms. Numbers are
/// coerced once, at submit time; blank or unparseable input coerces to zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub dish: String,
    pub server: String,
    pub table: String,
    pub price: String,
}

impl OrderDraft {
    fn parsed_table(&self) -> u32 {
        self.table.trim().parse().unwrap_or(0)
    }

    fn parsed_price(&self) -> f64 {
        self.price.trim().parse().unwrap_or(0.0)
    }

    pub fn to_create_request(&self) -> CreateOrderRequest {
        CreateOrderRequest {
            server: self.server.clone(),
            dish: self.dish.clone(),
            table: self.parsed_table(),
            price: self.parsed_price(),
        }
    }

    pub fn to_update_request(&self) -> UpdateOrderRequest {
        UpdateOrderRequest {
            dish: self.dish.clone(),
            server: self.server.clone(),
            table: self.parsed_table(),
            price: self.parsed_price(),
        }
    }
}

pub struct ControllerState {
    pub orders: Vec<Order>,
    stale: bool,
    pub add_order_open: bool,
    pub change_order: DialogTarget,
    pub change_waiter: DialogTarget,
    pub draft: OrderDraft,
    pub waiter_draft: String,
    pub waiter_filter: String,
    pub status: String,
}

impl ControllerState {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            // Mount-time fetch rides the same stale/refetch effect as every
            // later mutation.
            stale: true,
            add_order_open: false,
            change_order: DialogTarget::closed(),
            change_waiter: DialogTarget::closed(),
            draft: OrderDraft::default(),
            waiter_draft: String::new(),
            waiter_filter: String::new(),
            status: String::new(),
        }
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::OrdersFetched(orders) => self.orders = orders,
            UiEvent::MutationApplied(_) => self.stale = true,
        }
    }

    /// Observe-and-clear the stale flag. Yields at most one fetch command per
    /// update pass; the active waiter filter decides which fetch.
    pub fn take_refetch(&mut self) -> Option<BackendCommand> {
        if !self.stale {
            return None;
        }
        self.stale = false;

        let waiter = self.waiter_filter.trim();
        if waiter.is_empty() {
            Some(BackendCommand::FetchOrders)
        } else {
            Some(BackendCommand::FetchOrdersByWaiter {
                waiter: waiter.to_string(),
            })
        }
    }

    /// The filter field applies by requesting a refetch, never by touching
    /// the cached collection directly.
    pub fn apply_waiter_filter(&mut self) {
        self.stale = true;
    }

    pub fn open_create(&mut self) {
        self.draft = OrderDraft::default();
        self.add_order_open = true;
    }

    pub fn cancel_create(&mut self) {
        self.add_order_open = false;
    }

    pub fn submit_create(&mut self) -> BackendCommand {
        self.add_order_open = false;
        BackendCommand::CreateOrder {
            request: self.draft.to_create_request(),
        }
    }

    pub fn open_change_order(&mut self, target: OrderId) {
        self.draft = OrderDraft::default();
        self.change_order = DialogTarget::open_for(target);
    }

    pub fn cancel_change_order(&mut self) {
        self.change_order = DialogTarget::closed();
    }

    pub fn submit_change_order(&mut self) -> Option<BackendCommand> {
        let target = self.change_order.target.take();
        self.change_order = DialogTarget::closed();
        Some(BackendCommand::UpdateOrder {
            order_id: target?,
            request: self.draft.to_update_request(),
        })
    }

    pub fn open_change_waiter(&mut self, target: OrderId) {
        self.waiter_draft.clear();
        self.change_waiter = DialogTarget::open_for(target);
    }

    pub fn cancel_change_waiter(&mut self) {
        self.change_waiter = DialogTarget::closed();
    }

    pub fn submit_change_waiter(&mut self) -> Option<BackendCommand> {
        let target = self.change_waiter.target.take();
        self.change_waiter = DialogTarget::closed();
        Some(BackendCommand::UpdateWaiter {
            order_id: target?,
            server: self.waiter_draft.clone(),
        })
    }

    /// Delete needs no dialog; the row intent maps straight to a command.
    pub fn request_delete(&self, target: OrderId) -> BackendCommand {
        BackendCommand::DeleteOrder { order_id: target }
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}
