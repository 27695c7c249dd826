//! Book records owned by a seller.
//!
//! Books are a child entity: every book references exactly one seller and is
//! removed together with it. Only the operations the seller aggregate needs
//! are modelled here.

use super::SellerId;

/// Persisted book record.
///
/// # Examples
/// ```
/// use bookshop::domain::{Book, SellerId};
///
/// let book = Book {
///     id: 1,
///     title: "Burger".to_owned(),
///     author: "Face".to_owned(),
///     year: 2017,
///     count_pages: 2,
///     seller_id: SellerId::new(3),
/// };
/// assert_eq!(book.seller_id.get(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Store-assigned identifier.
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Publication year.
    pub year: i32,
    pub count_pages: i32,
    /// Owning seller.
    pub seller_id: SellerId,
}

/// Values for inserting a book under an existing seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: SellerId,
}

impl NewBook {
    /// Attach a store-assigned id.
    #[must_use]
    pub fn into_book(self, id: i64) -> Book {
        let Self {
            title,
            author,
            year,
            count_pages,
            seller_id,
        } = self;
        Book {
            id,
            title,
            author,
            year,
            count_pages,
            seller_id,
        }
    }
}
