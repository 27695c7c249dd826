//! PostgreSQL-backed `BookRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{Book, NewBook, SellerId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_seller_repository::row_to_book;
use super::models::{BookRow, NewBookRow};
use super::pool::DbPool;
use super::schema::books_table;

/// Diesel-backed implementation of the book persistence port.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(error: DieselError, seller_id: SellerId) -> BookRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) = &error {
        return BookRepositoryError::unknown_seller(seller_id.get());
    }
    map_diesel_error(
        error,
        BookRepositoryError::query,
        BookRepositoryError::connection,
    )
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn create(&self, book: &NewBook) -> Result<Book, BookRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, BookRepositoryError::connection))?;

        let new_row = NewBookRow {
            title: &book.title,
            author: &book.author,
            year: book.year,
            count_pages: book.count_pages,
            seller_id: book.seller_id.get(),
        };

        let row: BookRow = diesel::insert_into(books_table::table)
            .values(&new_row)
            .returning(BookRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| diesel_error(err, book.seller_id))?;

        Ok(row_to_book(row))
    }

    async fn list_by_seller(&self, seller_id: SellerId) -> Result<Vec<Book>, BookRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, BookRepositoryError::connection))?;

        let rows: Vec<BookRow> = books_table::table
            .filter(books_table::seller_id.eq(seller_id.get()))
            .select(BookRow::as_select())
            .order_by(books_table::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| diesel_error(err, seller_id))?;

        Ok(rows.into_iter().map(row_to_book).collect())
    }
}
