//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::FetchOrders => "fetch_orders",
        BackendCommand::FetchOrdersByWaiter { .. } => "fetch_orders_by_waiter",
        BackendCommand::CreateOrder { .. } => "create_order",
        BackendCommand::UpdateOrder { .. } => "update_order",
        BackendCommand::UpdateWaiter { .. } => "update_waiter",
        BackendCommand::DeleteOrder { .. } => "delete_order",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend command processor disconnected; restart the app".to_string();
        }
    }
}
