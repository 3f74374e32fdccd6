use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use shared::{
    domain::{Order, OrderId},
    error::{ApiError, ErrorCode},
    protocol::{CreateOrderRequest, UpdateOrderRequest, UpdateWaiterRequest},
};
use tracing::info;

mod config;
mod store;

use config::load_settings;
use store::OrderStore;

#[derive(Clone)]
struct AppState {
    store: OrderStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState {
        store: OrderStore::new(),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "order server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/orders", get(list_orders))
        .route("/order/:id", get(get_order))
        .route("/waiter/:waiter", get(list_orders_for_waiter))
        .route("/order/create", post(create_order))
        .route("/order/update/:id", put(update_order))
        .route("/waiter/update/:id", put(update_waiter))
        .route("/order/delete/:id", delete(delete_order))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(state.store.list().await)
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, (StatusCode, Json<ApiError>)> {
    state
        .store
        .get(&OrderId(id))
        .await
        .map(Json)
        .ok_or_else(|| not_found("order not found"))
}

async fn list_orders_for_waiter(
    State(state): State<Arc<AppState>>,
    Path(waiter): Path<String>,
) -> Json<Vec<Order>> {
    Json(state.store.list_for_waiter(&waiter).await)
}

async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateOrderRequest>,
) -> Json<Order> {
    let order = state.store.insert(request).await;
    info!(order_id = %order.id, dish = %order.dish, "order created");
    Json(order)
}

async fn update_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Json<Order>, (StatusCode, Json<ApiError>)> {
    let id = OrderId(id);
    let order = state
        .store
        .replace(&id, request)
        .await
        .ok_or_else(|| not_found("order not found"))?;
    info!(order_id = %id, "order updated");
    Ok(Json(order))
}

async fn update_waiter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateWaiterRequest>,
) -> Result<Json<Order>, (StatusCode, Json<ApiError>)> {
    let id = OrderId(id);
    let order = state
        .store
        .update_waiter(&id, &request.server)
        .await
        .ok_or_else(|| not_found("order not found"))?;
    info!(order_id = %id, waiter = %order.server, "waiter reassigned");
    Ok(Json(order))
}

async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    let id = OrderId(id);
    if state.store.delete(&id).await {
        info!(order_id = %id, "order deleted");
        Ok(StatusCode::OK)
    } else {
        Err(not_found("order not found"))
    }
}

fn not_found(message: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(ErrorCode::NotFound, message)),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
