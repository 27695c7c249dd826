//! PostgreSQL persistence adapters built on Diesel and `diesel-async`.

mod diesel_book_repository;
mod diesel_error_mapping;
mod diesel_seller_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_book_repository::DieselBookRepository;
pub use diesel_seller_repository::DieselSellerRepository;
pub use migrations::{MIGRATIONS, MigrationError, apply_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
