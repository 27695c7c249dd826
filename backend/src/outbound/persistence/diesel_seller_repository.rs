//! PostgreSQL-backed `SellerRepository` implementation using Diesel ORM.
//!
//! Each port call checks out one pooled connection. Multi-statement
//! operations run inside a transaction so the seller → book cascade is
//! all-or-nothing and reads see one snapshot.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::debug;

use crate::domain::ports::{SellerRepository, SellerRepositoryError};
use crate::domain::{
    Book, CreateSellerInput, Password, Seller, SellerId, SellerWithBooks, UpdateSellerInput,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookRow, NewSellerRow, SellerChangeset, SellerRow};
use super::pool::{DbPool, PoolError};
use super::schema::{books_table, seller_table};

/// Diesel-backed implementation of the seller persistence port.
#[derive(Clone)]
pub struct DieselSellerRepository {
    pool: DbPool,
}

impl DieselSellerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> SellerRepositoryError {
    map_pool_error(error, SellerRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> SellerRepositoryError {
    map_diesel_error(
        error,
        SellerRepositoryError::query,
        SellerRepositoryError::connection,
    )
}

pub(crate) fn row_to_seller(row: SellerRow) -> Seller {
    Seller::new(
        SellerId::new(row.id),
        row.first_name,
        row.last_name,
        row.email,
        Password::from_stored(row.password),
    )
}

pub(crate) fn row_to_book(row: BookRow) -> Book {
    Book {
        id: row.id,
        title: row.title,
        author: row.author,
        year: row.year,
        count_pages: row.count_pages,
        seller_id: SellerId::new(row.seller_id),
    }
}

#[async_trait]
impl SellerRepository for DieselSellerRepository {
    async fn create(&self, input: &CreateSellerInput) -> Result<Seller, SellerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let new_row = NewSellerRow {
            first_name: input.first_name.as_ref(),
            last_name: input.last_name.as_ref(),
            email: input.email.as_ref(),
            password: input.password.expose(),
        };

        let row: SellerRow = diesel::insert_into(seller_table::table)
            .values(&new_row)
            .returning(SellerRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(row_to_seller(row))
    }

    async fn list(&self) -> Result<Vec<Seller>, SellerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<SellerRow> = seller_table::table
            .select(SellerRow::as_select())
            .order_by(seller_table::id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(rows.into_iter().map(row_to_seller).collect())
    }

    async fn find_with_books(
        &self,
        id: SellerId,
    ) -> Result<Option<SellerWithBooks>, SellerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows = conn
            .build_transaction()
            .read_only()
            .repeatable_read()
            .run(|conn| {
                async move {
                    let seller: Option<SellerRow> = seller_table::table
                        .find(id.get())
                        .select(SellerRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;
                    let Some(seller) = seller else {
                        return Ok(None);
                    };
                    let books: Vec<BookRow> = books_table::table
                        .filter(books_table::seller_id.eq(id.get()))
                        .select(BookRow::as_select())
                        .order_by(books_table::id.asc())
                        .load(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>(Some((seller, books)))
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        Ok(rows.map(|(seller, books)| SellerWithBooks {
            seller: row_to_seller(seller),
            books: books.into_iter().map(row_to_book).collect(),
        }))
    }

    async fn update(
        &self,
        id: SellerId,
        changes: &UpdateSellerInput,
    ) -> Result<Option<Seller>, SellerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let changeset = SellerChangeset {
            first_name: changes.first_name.as_ref(),
            last_name: changes.last_name.as_ref(),
            email: changes.email.as_str(),
        };

        let row: Option<SellerRow> = diesel::update(seller_table::table.find(id.get()))
            .set(&changeset)
            .returning(SellerRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        Ok(row.map(row_to_seller))
    }

    async fn delete_with_books(&self, id: SellerId) -> Result<bool, SellerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        conn.transaction(|conn| {
            async move {
                // Row lock blocks concurrent book inserts for this seller.
                let locked: Option<i64> = seller_table::table
                    .find(id.get())
                    .select(seller_table::id)
                    .for_update()
                    .first(conn)
                    .await
                    .optional()?;
                if locked.is_none() {
                    return Ok(false);
                }

                let books_removed = diesel::delete(
                    books_table::table.filter(books_table::seller_id.eq(id.get())),
                )
                .execute(conn)
                .await?;
                diesel::delete(seller_table::table.find(id.get()))
                    .execute(conn)
                    .await?;

                debug!(seller_id = %id, books_removed, "seller rows deleted");
                Ok::<_, diesel::result::Error>(true)
            }
            .scope_boxed()
        })
        .await
        .map_err(diesel_error)
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion tests; queries run against embedded PostgreSQL in
    //! `tests/diesel_seller_repository.rs`.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn seller_row_converts_without_loss() {
        let row = SellerRow {
            id: 6,
            first_name: "rs".to_owned(),
            last_name: "cr".to_owned(),
            email: "link49@gmail.com".to_owned(),
            password: "1223".to_owned(),
        };

        let seller = row_to_seller(row);

        assert_eq!(seller.id(), SellerId::new(6));
        assert_eq!(seller.first_name(), "rs");
        assert_eq!(seller.last_name(), "cr");
        assert_eq!(seller.email(), "link49@gmail.com");
        assert_eq!(seller.password().expose(), "1223");
    }

    #[rstest]
    fn book_row_keeps_owner() {
        let row = BookRow {
            id: 1,
            title: "Burger".to_owned(),
            author: "Face".to_owned(),
            year: 2017,
            count_pages: 2,
            seller_id: 6,
        };

        let book = row_to_book(row);

        assert_eq!(book.seller_id, SellerId::new(6));
        assert_eq!(book.title, "Burger");
        assert_eq!(book.count_pages, 2);
    }
}
