//! Driving port for seller mutations.
use async_trait::async_trait;

use crate::domain::{CreateSellerInput, Error, Seller, SellerId, UpdateSellerInput};

#[async_trait]
pub trait SellersCommand: Send + Sync {
    /// Persist a new seller.
    async fn create(&self, input: CreateSellerInput) -> Result<Seller, Error>;

    /// Update a seller in place. `Ok(None)` when the seller does not exist.
    async fn update(
        &self,
        id: SellerId,
        changes: UpdateSellerInput,
    ) -> Result<Option<Seller>, Error>;

    /// Delete a seller and its books. Absent sellers are a no-op.
    async fn delete(&self, id: SellerId) -> Result<(), Error>;
}
