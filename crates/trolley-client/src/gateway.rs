//! Thin contract over the remote cart operations.
//!
//! [`CartGateway`] mirrors the four remote calls the cart service
//! exposes. [`HttpCartGateway`] implements it over an injected
//! [`Transport`], normalizing every response at this boundary: non-2xx
//! statuses map to [`CartError::Server`], transport failures to
//! [`CartError::Network`], and bodies run through the envelope decoder
//! so unrecognized shapes degrade to "no usable payload" instead of
//! failing the caller.

use crate::envelope;
use crate::error::CartError;
use crate::transport::{Transport, TransportRequest, TransportResponse};
use async_trait::async_trait;
use http::Method;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;
use trolley_core::{CartEntry, EntryId, ProductId, UserId};

/// Default page requested on list calls.
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size requested on list calls.
pub const DEFAULT_LIMIT: u32 = 100;

/// Payload for creating a cart entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    /// Product to add.
    pub product_id: ProductId,
    /// Requested quantity.
    pub quantity: u32,
}

/// Remote cart operations.
#[async_trait]
pub trait CartGateway: Send + Sync {
    /// Fetch the user's cart. A response without a usable collection
    /// yields an empty list, not an error.
    async fn list(&self, user_id: &UserId) -> Result<Vec<CartEntry>, CartError>;

    /// Create an entry. Returns the post-mutation full cart, which may
    /// be empty when the server omits a usable payload even on success.
    async fn create(&self, entry: &NewEntry) -> Result<Vec<CartEntry>, CartError>;

    /// Update an entry's quantity. Returns the updated entry, or `None`
    /// when the server omits it.
    async fn update_quantity(
        &self,
        entry_id: &EntryId,
        quantity: u32,
    ) -> Result<Option<CartEntry>, CartError>;

    /// Delete an entry. A 2xx status is the only success signal.
    async fn delete(&self, entry_id: &EntryId) -> Result<(), CartError>;
}

/// HTTP implementation of [`CartGateway`].
pub struct HttpCartGateway<T> {
    transport: T,
    page: u32,
    limit: u32,
}

impl<T: Transport> HttpCartGateway<T> {
    /// Create a gateway over the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Override the page requested on list calls.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Override the page size requested on list calls.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[async_trait]
impl<T: Transport> CartGateway for HttpCartGateway<T> {
    async fn list(&self, user_id: &UserId) -> Result<Vec<CartEntry>, CartError> {
        let request = TransportRequest::new(Method::GET, "/cart")
            .with_query("userId", user_id.as_str())
            .with_query("page", self.page.to_string())
            .with_query("limit", self.limit.to_string());

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(server_error(&response));
        }

        Ok(decode_entry_list(response.body.as_ref(), "list"))
    }

    async fn create(&self, entry: &NewEntry) -> Result<Vec<CartEntry>, CartError> {
        let request = TransportRequest::new(Method::POST, "/cart").with_body(json!({
            "productId": entry.product_id.as_str(),
            "quantity": entry.quantity,
        }));

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(server_error(&response));
        }

        Ok(decode_entry_list(response.body.as_ref(), "create"))
    }

    async fn update_quantity(
        &self,
        entry_id: &EntryId,
        quantity: u32,
    ) -> Result<Option<CartEntry>, CartError> {
        let request = TransportRequest::new(Method::PUT, format!("/cart/{entry_id}"))
            .with_body(json!({ "quantity": quantity }));

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(server_error(&response));
        }

        Ok(response.body.as_ref().and_then(envelope::single_entry))
    }

    async fn delete(&self, entry_id: &EntryId) -> Result<(), CartError> {
        let request = TransportRequest::new(Method::DELETE, format!("/cart/{entry_id}"));

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(server_error(&response));
        }
        Ok(())
    }
}

/// Decode a list-bearing body, degrading unrecognized shapes to empty.
fn decode_entry_list(body: Option<&Value>, operation: &str) -> Vec<CartEntry> {
    match body.and_then(envelope::entry_list) {
        Some(entries) => entries,
        None => {
            debug!(operation, "response had no usable collection");
            Vec::new()
        }
    }
}

/// Map a non-2xx response to a server error.
fn server_error(response: &TransportResponse) -> CartError {
    let message = response
        .body
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .or_else(|| response.status.canonical_reason())
        .unwrap_or("server error")
        .to_string();

    CartError::Server {
        status: response.status.as_u16(),
        message,
    }
}
