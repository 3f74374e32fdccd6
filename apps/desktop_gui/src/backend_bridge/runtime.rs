//! Runtime bridge between the UI command queue and the order service.
//!
//! One worker thread owns a tokio runtime and the HTTP client, draining
//! commands in submission order. Failed round-trips are logged, handed to the
//! error observer, and otherwise dropped: the UI only ever hears about
//! successes.

use std::{sync::Arc, thread};

use client_core::{OrdersClient, RequestErrorObserver};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{MutationKind, UiEvent};

pub fn launch(
    server_url: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    observer: Arc<dyn RequestErrorObserver>,
) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = OrdersClient::new(server_url);
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchOrders => {
                        tracing::info!("backend: fetch_orders");
                        match client.fetch_all_orders().await {
                            Ok(orders) => {
                                let _ = ui_tx.try_send(UiEvent::OrdersFetched(orders));
                            }
                            Err(err) => {
                                tracing::warn!("backend: fetch_orders failed: {err}");
                                observer.request_failed("fetch_orders", &err);
                            }
                        }
                    }
                    BackendCommand::FetchOrdersByWaiter { waiter } => {
                        tracing::info!(%waiter, "backend: fetch_orders_by_waiter");
                        match client.fetch_orders_by_waiter(&waiter).await {
                            Ok(orders) => {
                                let _ = ui_tx.try_send(UiEvent::OrdersFetched(orders));
                            }
                            Err(err) => {
                                tracing::warn!("backend: fetch_orders_by_waiter failed: {err}");
                                observer.request_failed("fetch_orders_by_waiter", &err);
                            }
                        }
                    }
                    BackendCommand::CreateOrder { request } => {
                        tracing::info!(dish = %request.dish, "backend: create_order");
                        match client.create_order(&request).await {
                            Ok(()) => {
                                let _ =
                                    ui_tx.try_send(UiEvent::MutationApplied(MutationKind::Create));
                            }
                            Err(err) => {
                                tracing::warn!("backend: create_order failed: {err}");
                                observer.request_failed("create_order", &err);
                            }
                        }
                    }
                    BackendCommand::UpdateOrder { order_id, request } => {
                        tracing::info!(%order_id, "backend: update_order");
                        match client.update_order(&order_id, &request).await {
                            Ok(()) => {
                                let _ = ui_tx
                                    .try_send(UiEvent::MutationApplied(MutationKind::UpdateOrder));
                            }
                            Err(err) => {
                                tracing::warn!(%order_id, "backend: update_order failed: {err}");
                                observer.request_failed("update_order", &err);
                            }
                        }
                    }
                    BackendCommand::UpdateWaiter { order_id, server } => {
                        tracing::info!(%order_id, waiter = %server, "backend: update_waiter");
                        match client.update_waiter(&order_id, &server).await {
                            Ok(()) => {
                                let _ = ui_tx
                                    .try_send(UiEvent::MutationApplied(MutationKind::UpdateWaiter));
                            }
                            Err(err) => {
                                tracing::warn!(%order_id, "backend: update_waiter failed: {err}");
                                observer.request_failed("update_waiter", &err);
                            }
                        }
                    }
                    BackendCommand::DeleteOrder { order_id } => {
                        tracing::info!(%order_id, "backend: delete_order");
                        match client.delete_order(&order_id).await {
                            Ok(()) => {
                                let _ =
                                    ui_tx.try_send(UiEvent::MutationApplied(MutationKind::Delete));
                            }
                            Err(err) => {
                                tracing::warn!(%order_id, "backend: delete_order failed: {err}");
                                observer.request_failed("delete_order", &err);
                            }
                        }
                    }
                }
            }
        });
    });
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
