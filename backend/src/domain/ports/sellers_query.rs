//! Driving port for seller reads.
use async_trait::async_trait;

use crate::domain::{Error, Seller, SellerId, SellerWithBooks};

#[async_trait]
pub trait SellersQuery: Send + Sync {
    /// Every seller known to the store.
    async fn list(&self) -> Result<Vec<Seller>, Error>;

    /// One seller with its current books. `Ok(None)` when absent.
    async fn get_with_books(&self, id: SellerId) -> Result<Option<SellerWithBooks>, Error>;
}
