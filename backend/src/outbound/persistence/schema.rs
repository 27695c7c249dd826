//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Seller accounts.
    seller_table (id) {
        /// Primary key assigned from a sequence.
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Varchar,
        /// Stored verbatim.
        password -> Varchar,
    }
}

diesel::table! {
    /// Books owned by a seller.
    books_table (id) {
        id -> Int8,
        title -> Varchar,
        author -> Varchar,
        year -> Int4,
        count_pages -> Int4,
        /// Foreign key to `seller_table.id`.
        seller_id -> Int8,
    }
}

diesel::joinable!(books_table -> seller_table (seller_id));
diesel::allow_tables_to_appear_in_same_query!(seller_table, books_table);
