//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every seller endpoint together with the request,
//! projection and error schemas. The document backs Swagger UI in debug
//! builds and is printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::seller_views::{
    BookView, SellerListView, SellerView, SellerWithBooksView,
};
use crate::inbound::http::sellers::{CreateSellerRequest, UpdateSellerRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshop backend API",
        description = "Seller management with embedded book listings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::sellers::create_seller,
        crate::inbound::http::sellers::list_sellers,
        crate::inbound::http::sellers::get_seller,
        crate::inbound::http::sellers::update_seller,
        crate::inbound::http::sellers::delete_seller,
    ),
    components(schemas(
        CreateSellerRequest,
        UpdateSellerRequest,
        SellerView,
        SellerListView,
        SellerWithBooksView,
        BookView,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "seller", description = "Sellers and the books they own")
    )
)]
pub struct ApiDoc;
