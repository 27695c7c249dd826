//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so they stay testable without a database.

use std::sync::Arc;

use crate::domain::SellerService;
use crate::domain::ports::{SellerRepository, SellersCommand, SellersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub sellers: Arc<dyn SellersCommand>,
    pub sellers_query: Arc<dyn SellersQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(sellers: Arc<dyn SellersCommand>, sellers_query: Arc<dyn SellersQuery>) -> Self {
        Self {
            sellers,
            sellers_query,
        }
    }

    /// Wire a [`SellerService`] over `repo` into both seller ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bookshop::inbound::http::state::HttpState;
    /// use bookshop::outbound::memory::InMemoryStore;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryStore::new()));
    /// let _query = state.sellers_query.clone();
    /// ```
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: SellerRepository + 'static,
    {
        let service = Arc::new(SellerService::new(repo));
        Self::new(service.clone(), service)
    }
}
