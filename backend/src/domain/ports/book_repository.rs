//! Port for the book records a seller owns.
use async_trait::async_trait;

use crate::domain::{Book, NewBook, SellerId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by book repository adapters.
    pub enum BookRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "book repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "book repository query failed: {message}",
        /// The referenced seller does not exist.
        UnknownSeller { seller_id: i64 } => "seller {seller_id} does not exist",
    }
}

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book under an existing seller.
    async fn create(&self, book: &NewBook) -> Result<Book, BookRepositoryError>;

    /// Books whose `seller_id` matches.
    async fn list_by_seller(&self, seller_id: SellerId) -> Result<Vec<Book>, BookRepositoryError>;
}
