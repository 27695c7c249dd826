//! Response projections for the seller resource.
//!
//! Each view copies fields out of the domain records. None of them has a
//! password field, so the stored password cannot reach a response body.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Book, Seller, SellerWithBooks};

/// Seller as returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SellerView {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "rs")]
    pub first_name: String,
    #[schema(example = "cr")]
    pub last_name: String,
    #[schema(example = "link49@gmail.com")]
    pub email: String,
}

impl From<Seller> for SellerView {
    fn from(value: Seller) -> Self {
        Self::from(&value)
    }
}

impl From<&Seller> for SellerView {
    fn from(value: &Seller) -> Self {
        Self {
            id: value.id().get(),
            first_name: value.first_name().to_owned(),
            last_name: value.last_name().to_owned(),
            email: value.email().to_owned(),
        }
    }
}

/// Envelope for the seller list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SellerListView {
    pub sellers: Vec<SellerView>,
}

impl From<Vec<Seller>> for SellerListView {
    fn from(value: Vec<Seller>) -> Self {
        Self {
            sellers: value.iter().map(SellerView::from).collect(),
        }
    }
}

/// Book embedded in a seller detail response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookView {
    pub id: i64,
    #[schema(example = "Burger")]
    pub title: String,
    #[schema(example = "Face")]
    pub author: String,
    #[schema(example = 2017)]
    pub year: i32,
    #[schema(example = 2)]
    pub count_pages: i32,
}

impl From<Book> for BookView {
    fn from(value: Book) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author: value.author,
            year: value.year,
            count_pages: value.count_pages,
        }
    }
}

/// Seller detail with the books it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SellerWithBooksView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub books: Vec<BookView>,
}

impl From<SellerWithBooks> for SellerWithBooksView {
    fn from(value: SellerWithBooks) -> Self {
        let SellerWithBooks { seller, books } = value;
        let SellerView {
            id,
            first_name,
            last_name,
            email,
        } = SellerView::from(seller);
        Self {
            id,
            first_name,
            last_name,
            email,
            books: books.into_iter().map(BookView::from).collect(),
        }
    }
}
