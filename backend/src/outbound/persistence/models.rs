//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain records before returning.

use diesel::prelude::*;

use super::schema::{books_table, seller_table};

/// Row read from `seller_table`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = seller_table)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SellerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Insertable seller values; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = seller_table)]
pub(crate) struct NewSellerRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Mutable seller columns. `password` is intentionally absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = seller_table)]
pub(crate) struct SellerChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

/// Row read from `books_table`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books_table)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i64,
}

/// Insertable book values.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books_table)]
pub(crate) struct NewBookRow<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i64,
}
