//! Seller use-cases.
//!
//! [`SellerService`] implements the driving ports on top of a
//! [`SellerRepository`]. Inputs arrive already validated, so the service only
//! orchestrates persistence, maps adapter failures into domain errors, and
//! records the outcome.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{SellerRepository, SellerRepositoryError, SellersCommand, SellersQuery};
use crate::domain::{CreateSellerInput, Error, Seller, SellerId, SellerWithBooks, UpdateSellerInput};

/// Seller service implementing [`SellersCommand`] and [`SellersQuery`].
#[derive(Clone)]
pub struct SellerService<R> {
    repo: Arc<R>,
}

impl<R> SellerService<R> {
    /// Create a service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(error: SellerRepositoryError) -> Error {
    match error {
        SellerRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("seller repository unavailable: {message}"))
        }
        SellerRepositoryError::Query { message } => {
            Error::internal(format!("seller repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> SellersCommand for SellerService<R>
where
    R: SellerRepository,
{
    async fn create(&self, input: CreateSellerInput) -> Result<Seller, Error> {
        let seller = self
            .repo
            .create(&input)
            .await
            .map_err(map_repository_error)?;
        info!(seller_id = %seller.id(), "seller created");
        Ok(seller)
    }

    async fn update(
        &self,
        id: SellerId,
        changes: UpdateSellerInput,
    ) -> Result<Option<Seller>, Error> {
        let updated = self
            .repo
            .update(id, &changes)
            .await
            .map_err(map_repository_error)?;
        match &updated {
            Some(_) => info!(seller_id = %id, "seller updated"),
            None => debug!(seller_id = %id, "update skipped: seller not found"),
        }
        Ok(updated)
    }

    async fn delete(&self, id: SellerId) -> Result<(), Error> {
        let removed = self
            .repo
            .delete_with_books(id)
            .await
            .map_err(map_repository_error)?;
        if removed {
            info!(seller_id = %id, "seller deleted with its books");
        } else {
            debug!(seller_id = %id, "delete skipped: seller not found");
        }
        Ok(())
    }
}

#[async_trait]
impl<R> SellersQuery for SellerService<R>
where
    R: SellerRepository,
{
    async fn list(&self) -> Result<Vec<Seller>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    async fn get_with_books(&self, id: SellerId) -> Result<Option<SellerWithBooks>, Error> {
        self.repo
            .find_with_books(id)
            .await
            .map_err(map_repository_error)
    }
}
