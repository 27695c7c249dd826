//! HTTP inbound adapter exposing the seller REST endpoints.

pub mod error;
pub mod schemas;
pub mod seller_views;
pub mod sellers;
pub mod state;
mod validation;

pub use error::ApiResult;
