use std::sync::Arc;

use super::*;
use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Debug)]
struct Captured {
    path_id: Option<String>,
    body: Option<serde_json::Value>,
}

#[derive(Clone)]
struct CaptureState {
    tx: Arc<Mutex<Option<oneshot::Sender<Captured>>>>,
}

impl CaptureState {
    fn pair() -> (Self, oneshot::Receiver<Captured>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Arc::new(Mutex::new(Some(tx))),
            },
            rx,
        )
    }

    async fn record(&self, captured: Captured) {
        if let Some(tx) = self.tx.lock().await.take() {
            let _ = tx.send(captured);
        }
    }
}

async fn spawn_server(app: Router) -> anyhow::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

fn sample_order(id: &str, dish: &str, server: &str, table: u32, price: f64) -> Order {
    Order {
        id: OrderId::from(id),
        dish: dish.to_string(),
        server: server.to_string(),
        table,
        price,
    }
}

#[tokio::test]
async fn fetch_all_orders_deserializes_the_full_collection() {
    let app = Router::new().route(
        "/orders",
        get(|| async {
            Json(vec![
                sample_order("1", "Soup", "Ann", 2, 5.5),
                sample_order("2", "Pasta", "Bob", 3, 12.5),
            ])
        }),
    );
    let url = spawn_server(app).await.expect("spawn server");

    let client = OrdersClient::new(url);
    let orders = client.fetch_all_orders().await.expect("fetch");

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, OrderId::from("1"));
    assert_eq!(orders[0].dish, "Soup");
    assert_eq!(orders[1].server, "Bob");
}

#[tokio::test]
async fn create_order_posts_numeric_table_and_price() {
    let (state, rx) = CaptureState::pair();
    let app = Router::new()
        .route(
            "/order/create",
            post(
                |State(state): State<CaptureState>, Json(body): Json<serde_json::Value>| async move {
                    state
                        .record(Captured {
                            path_id: None,
                            body: Some(body),
                        })
                        .await;
                    StatusCode::OK
                },
            ),
        )
        .with_state(state);
    let url = spawn_server(app).await.expect("spawn server");

    let client = OrdersClient::new(url);
    client
        .create_order(&CreateOrderRequest {
            server: "Bob".to_string(),
            dish: "Pasta".to_string(),
            table: 3,
            price: 12.5,
        })
        .await
        .expect("create");

    let captured = rx.await.expect("captured request");
    let body = captured.body.expect("json body");
    assert_eq!(body["server"], "Bob");
    assert_eq!(body["dish"], "Pasta");
    assert_eq!(body["table"], 3);
    assert!(body["price"].is_f64(), "price must go out as a number");
    assert_eq!(body["price"], 12.5);
}

#[tokio::test]
async fn update_order_puts_full_payload_to_target_id() {
    let (state, rx) = CaptureState::pair();
    let app = Router::new()
        .route(
            "/order/update/:id",
            put(
                |State(state): State<CaptureState>,
                 Path(id): Path<String>,
                 Json(body): Json<serde_json::Value>| async move {
                    state
                        .record(Captured {
                            path_id: Some(id),
                            body: Some(body),
                        })
                        .await;
                    StatusCode::OK
                },
            ),
        )
        .with_state(state);
    let url = spawn_server(app).await.expect("spawn server");

    let client = OrdersClient::new(url);
    client
        .update_order(
            &OrderId::from("42"),
            &UpdateOrderRequest {
                dish: "Risotto".to_string(),
                server: "Ann".to_string(),
                table: 7,
                price: 18.0,
            },
        )
        .await
        .expect("update");

    let captured = rx.await.expect("captured request");
    assert_eq!(captured.path_id.as_deref(), Some("42"));
    let body = captured.body.expect("json body");
    assert_eq!(body["dish"], "Risotto");
    assert_eq!(body["server"], "Ann");
    assert_eq!(body["table"], 7);
    assert_eq!(body["price"], 18.0);
}

#[tokio::test]
async fn update_waiter_sends_only_the_server_field() {
    let (state, rx) = CaptureState::pair();
    let app = Router::new()
        .route(
            "/waiter/update/:id",
            put(
                |State(state): State<CaptureState>,
                 Path(id): Path<String>,
                 Json(body): Json<serde_json::Value>| async move {
                    state
                        .record(Captured {
                            path_id: Some(id),
                            body: Some(body),
                        })
                        .await;
                    StatusCode::OK
                },
            ),
        )
        .with_state(state);
    let url = spawn_server(app).await.expect("spawn server");

    let client = OrdersClient::new(url);
    client
        .update_waiter(&OrderId::from("7"), "Carol")
        .await
        .expect("update waiter");

    let captured = rx.await.expect("captured request");
    assert_eq!(captured.path_id.as_deref(), Some("7"));
    let body = captured.body.expect("json body");
    assert_eq!(body, serde_json::json!({ "server": "Carol" }));
}

#[tokio::test]
async fn delete_order_targets_the_id_path() {
    let (state, rx) = CaptureState::pair();
    let app = Router::new()
        .route(
            "/order/delete/:id",
            delete(
                |State(state): State<CaptureState>, Path(id): Path<String>| async move {
                    state
                        .record(Captured {
                            path_id: Some(id),
                            body: None,
                        })
                        .await;
                    StatusCode::OK
                },
            ),
        )
        .with_state(state);
    let url = spawn_server(app).await.expect("spawn server");

    let client = OrdersClient::new(url);
    client
        .delete_order(&OrderId::from("9"))
        .await
        .expect("delete");

    let captured = rx.await.expect("captured request");
    assert_eq!(captured.path_id.as_deref(), Some("9"));
}

#[tokio::test]
async fn fetch_order_and_fetch_by_waiter_hit_the_read_routes() {
    let app = Router::new()
        .route(
            "/order/:id",
            get(|Path(id): Path<String>| async move {
                Json(sample_order(&id, "Soup", "Ann", 2, 5.5))
            }),
        )
        .route(
            "/waiter/:waiter",
            get(|Path(waiter): Path<String>| async move {
                Json(vec![sample_order("3", "Stew", &waiter, 4, 9.0)])
            }),
        );
    let url = spawn_server(app).await.expect("spawn server");

    let client = OrdersClient::new(url);
    let order = client.fetch_order(&OrderId::from("11")).await.expect("get");
    assert_eq!(order.id, OrderId::from("11"));

    let orders = client
        .fetch_orders_by_waiter("Carol")
        .await
        .expect("by waiter");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].server, "Carol");
}

#[tokio::test]
async fn non_success_status_is_reported_as_an_error() {
    let app = Router::new()
        .route("/waiter/update/:id", put(|| async { StatusCode::NOT_FOUND }))
        .route("/order/delete/:id", delete(|| async { StatusCode::NOT_FOUND }));
    let url = spawn_server(app).await.expect("spawn server");

    let client = OrdersClient::new(url);
    assert!(client
        .update_waiter(&OrderId::from("7"), "Carol")
        .await
        .is_err());
    assert!(client.delete_order(&OrderId::from("7")).await.is_err());
}

#[tokio::test]
async fn transport_failure_is_reported_as_an_error() {
    // Bind then drop a listener so the port is very likely unoccupied.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = OrdersClient::new(format!("http://{addr}"));
    assert!(client.fetch_all_orders().await.is_err());
}

#[test]
fn silent_errors_observer_is_a_no_op() {
    let observer = SilentErrors;
    observer.request_failed("create_order", &anyhow!("connection refused"));
}
