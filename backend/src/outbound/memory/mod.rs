//! Process-local seller and book store.
//!
//! Serves as the fallback store when no database URL is configured and as the
//! backing store for HTTP tests. One mutex guards all state so every port call
//! is atomic, matching the transactional guarantees of the Diesel adapter.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    BookRepository, BookRepositoryError, SellerRepository, SellerRepositoryError,
};
use crate::domain::{
    Book, CreateSellerInput, NewBook, Seller, SellerId, SellerWithBooks, UpdateSellerInput,
};

#[derive(Debug, Default)]
struct StoreState {
    sellers: BTreeMap<SellerId, Seller>,
    books: BTreeMap<i64, Book>,
    last_seller_id: i64,
    last_book_id: i64,
}

impl StoreState {
    fn books_of(&self, seller_id: SellerId) -> Vec<Book> {
        self.books
            .values()
            .filter(|book| book.seller_id == seller_id)
            .cloned()
            .collect()
    }
}

/// In-memory implementation of [`SellerRepository`] and [`BookRepository`].
///
/// Identifiers come from monotonic counters and are never reused, even after
/// deletes.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, &'static str> {
        self.state
            .lock()
            .map_err(|_| "in-memory store lock poisoned")
    }
}

#[async_trait]
impl SellerRepository for InMemoryStore {
    async fn create(&self, input: &CreateSellerInput) -> Result<Seller, SellerRepositoryError> {
        let mut state = self.lock().map_err(SellerRepositoryError::query)?;
        state.last_seller_id += 1;
        let id = SellerId::new(state.last_seller_id);
        let seller = Seller::from_input(id, input.clone());
        state.sellers.insert(id, seller.clone());
        Ok(seller)
    }

    async fn list(&self) -> Result<Vec<Seller>, SellerRepositoryError> {
        let state = self.lock().map_err(SellerRepositoryError::query)?;
        Ok(state.sellers.values().cloned().collect())
    }

    async fn find_with_books(
        &self,
        id: SellerId,
    ) -> Result<Option<SellerWithBooks>, SellerRepositoryError> {
        let state = self.lock().map_err(SellerRepositoryError::query)?;
        Ok(state.sellers.get(&id).map(|seller| SellerWithBooks {
            seller: seller.clone(),
            books: state.books_of(id),
        }))
    }

    async fn update(
        &self,
        id: SellerId,
        changes: &UpdateSellerInput,
    ) -> Result<Option<Seller>, SellerRepositoryError> {
        let mut state = self.lock().map_err(SellerRepositoryError::query)?;
        Ok(state.sellers.get_mut(&id).map(|seller| {
            seller.apply(changes.clone());
            seller.clone()
        }))
    }

    async fn delete_with_books(&self, id: SellerId) -> Result<bool, SellerRepositoryError> {
        let mut state = self.lock().map_err(SellerRepositoryError::query)?;
        if state.sellers.remove(&id).is_none() {
            return Ok(false);
        }
        state.books.retain(|_, book| book.seller_id != id);
        Ok(true)
    }
}

#[async_trait]
impl BookRepository for InMemoryStore {
    async fn create(&self, book: &NewBook) -> Result<Book, BookRepositoryError> {
        let mut state = self.lock().map_err(BookRepositoryError::query)?;
        if !state.sellers.contains_key(&book.seller_id) {
            return Err(BookRepositoryError::unknown_seller(book.seller_id.get()));
        }
        state.last_book_id += 1;
        let created = book.clone().into_book(state.last_book_id);
        state.books.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_by_seller(&self, seller_id: SellerId) -> Result<Vec<Book>, BookRepositoryError> {
        let state = self.lock().map_err(BookRepositoryError::query)?;
        Ok(state.books_of(seller_id))
    }
}
