//! Domain ports: the traits adapters implement (driven) and the use-case
//! traits inbound adapters call (driving).

mod macros;
pub(crate) use macros::define_port_error;

mod book_repository;
mod seller_repository;
mod sellers_command;
mod sellers_query;

pub use book_repository::{BookRepository, BookRepositoryError};
#[cfg(test)]
pub use seller_repository::MockSellerRepository;
pub use seller_repository::{SellerRepository, SellerRepositoryError};
pub use sellers_command::SellersCommand;
pub use sellers_query::SellersQuery;
