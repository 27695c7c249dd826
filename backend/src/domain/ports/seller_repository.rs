//! Port for seller persistence, including the seller → book cascade.
use async_trait::async_trait;

use crate::domain::{CreateSellerInput, Seller, SellerId, SellerWithBooks, UpdateSellerInput};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by seller repository adapters.
    pub enum SellerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "seller repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "seller repository query failed: {message}",
    }
}

/// Durable seller storage.
///
/// Every method is one unit of work: adapters acquire a connection, run the
/// statements, and commit or roll back before returning.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// Insert a seller and return it with its store-assigned id.
    async fn create(&self, input: &CreateSellerInput) -> Result<Seller, SellerRepositoryError>;

    /// Return every seller.
    async fn list(&self) -> Result<Vec<Seller>, SellerRepositoryError>;

    /// Fetch a seller and the books it owns from one consistent snapshot.
    async fn find_with_books(
        &self,
        id: SellerId,
    ) -> Result<Option<SellerWithBooks>, SellerRepositoryError>;

    /// Replace the mutable fields of a seller. Returns `None` when absent.
    async fn update(
        &self,
        id: SellerId,
        changes: &UpdateSellerInput,
    ) -> Result<Option<Seller>, SellerRepositoryError>;

    /// Delete a seller together with all of its books, atomically.
    ///
    /// Returns whether a seller row was removed.
    async fn delete_with_books(&self, id: SellerId) -> Result<bool, SellerRepositoryError>;
}
