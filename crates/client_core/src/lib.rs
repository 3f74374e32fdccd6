use anyhow::Result;
use reqwest::Client;
use shared::{
    domain::{Order, OrderId},
    protocol::{CreateOrderRequest, UpdateOrderRequest, UpdateWaiterRequest},
};
use tracing::debug;

/// Observer for failed round-trips. The UI deliberately surfaces nothing on
/// failure, so this seam is the only place a failure can be seen from the
/// outside; tests inject a recording implementation.
pub trait RequestErrorObserver: Send + Sync {
    fn request_failed(&self, operation: &'static str, error: &anyhow::Error);
}

/// Default observer: swallow everything.
pub struct SilentErrors;

impl RequestErrorObserver for SilentErrors {
    fn request_failed(&self, _operation: &'static str, _error: &anyhow::Error) {}
}

pub struct OrdersClient {
    http: Client,
    base_url: String,
}

impl OrdersClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_all_orders(&self) -> Result<Vec<Order>> {
        let res = self
            .http
            .get(format!("{}/orders", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        let orders: Vec<Order> = res.json().await?;
        debug!(count = orders.len(), "fetched order collection");
        Ok(orders)
    }

    pub async fn fetch_order(&self, id: &OrderId) -> Result<Order> {
        let res = self
            .http
            .get(format!("{}/order/{}", self.base_url, id))
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn fetch_orders_by_waiter(&self, waiter: &str) -> Result<Vec<Order>> {
        let res = self
            .http
            .get(format!("{}/waiter/{}", self.base_url, waiter))
            .send()
            .await?
            .error_for_status()?;
        let orders: Vec<Order> = res.json().await?;
        debug!(count = orders.len(), waiter, "fetched orders for waiter");
        Ok(orders)
    }

    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<()> {
        self.http
            .post(format!("{}/order/create", self.base_url))
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn update_order(&self, id: &OrderId, request: &UpdateOrderRequest) -> Result<()> {
        self.http
            .put(format!("{}/order/update/{}", self.base_url, id))
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn update_waiter(&self, id: &OrderId, server: &str) -> Result<()> {
        self.http
            .put(format!("{}/waiter/update/{}", self.base_url, id))
            .json(&UpdateWaiterRequest {
                server: server.to_string(),
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn delete_order(&self, id: &OrderId) -> Result<()> {
        self.http
            .delete(format!("{}/order/delete/{}", self.base_url, id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
