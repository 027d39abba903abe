//! Session-gated cart state, synchronized with a remote cart service.
//!
//! This crate keeps a local projection of a user's cart convergent with
//! an authoritative remote store that is reachable only through four
//! asynchronous operations (list, create, update-quantity, delete):
//!
//! - **Transport**: the seam applications implement over their HTTP
//!   client; the crate ships none of its own
//! - **Gateway**: the thin contract over the four remote calls, with
//!   all envelope decoding and error mapping at that one boundary
//! - **Reconcile**: per-mutation patch-or-resync decisions
//! - **Store**: the stateful service holding the item list and busy
//!   flag, gated on the injected session
//!
//! # Example
//!
//! ```rust,ignore
//! use trolley_client::prelude::*;
//!
//! // An application-provided Transport implementation.
//! let transport = MyTransport::new(TransportConfig::new("https://api.example.com"));
//! let store = CartStore::new(HttpCartGateway::new(transport));
//!
//! // The identity provider pushes session transitions in; a login
//! // loads that user's cart, a logout clears it.
//! store.set_session(Session::logged_in("u1")).await?;
//!
//! store.add("p1", 1).await?;
//! store.set_quantity(&EntryId::new("c1"), 3).await?;
//! println!("{} items, total {}", store.item_count(), store.total_amount());
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod reconcile;
pub mod session;
pub mod store;
pub mod transport;

pub use config::{FetchFailurePolicy, StoreConfig};
pub use error::CartError;
pub use gateway::{CartGateway, HttpCartGateway, NewEntry};
pub use session::Session;
pub use store::{CartState, CartStore};
pub use transport::{Transport, TransportConfig, TransportError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{FetchFailurePolicy, StoreConfig};
    pub use crate::error::CartError;
    pub use crate::gateway::{CartGateway, HttpCartGateway, NewEntry};
    pub use crate::reconcile::Reconciliation;
    pub use crate::session::Session;
    pub use crate::store::{CartState, CartStore};
    pub use crate::transport::{
        Transport, TransportConfig, TransportError, TransportRequest, TransportResponse,
    };

    pub use trolley_core::prelude::*;
}
