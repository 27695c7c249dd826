//! Domain types, ports, and use-cases.
//!
//! Purpose: keep the seller aggregate, its validation rules, and the service
//! orchestrating persistence free of HTTP and database concerns.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Seller, SellerWithBooks, SellerId: the aggregate root and its join.
//! - CreateSellerInput / UpdateSellerInput: validated write inputs.
//! - Book / NewBook: child records owned by a seller.
//! - SellerService: implementation of the seller driving ports.

pub mod book;
pub mod error;
pub mod ports;
pub mod seller;
pub mod seller_service;
pub mod trace_id;

pub use self::book::{Book, NewBook};
pub use self::error::{Error, ErrorCode};
pub use self::seller::{
    CreateSellerInput, EmailAddress, Password, PersonName, SELLER_FIELD_MAX, Seller, SellerId,
    SellerValidationError, SellerWithBooks, UpdateSellerInput,
};
pub use self::seller_service::SellerService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
