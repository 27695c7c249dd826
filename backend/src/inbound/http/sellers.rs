//! Seller resource HTTP handlers.
//!
//! ```text
//! POST   /api/v1/seller
//! GET    /api/v1/seller
//! GET    /api/v1/seller/{seller_id}
//! PUT    /api/v1/seller/{seller_id}
//! DELETE /api/v1/seller/{seller_id}
//! ```
//!
//! Absent sellers answer 404 with an empty body on get and update; delete is
//! idempotent and always answers 204.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{CreateSellerInput, Error, SellerId, UpdateSellerInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{json_error_handler, path_error_handler};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::seller_views::{SellerListView, SellerView, SellerWithBooksView};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require;

/// Request payload for creating a seller.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateSellerRequest {
    #[schema(example = "rs")]
    pub first_name: Option<String>,
    #[schema(example = "cr")]
    pub last_name: Option<String>,
    #[schema(example = "link49@gmail.com")]
    pub email: Option<String>,
    #[schema(example = "1223")]
    pub password: Option<String>,
}

impl TryFrom<CreateSellerRequest> for CreateSellerInput {
    type Error = Error;

    fn try_from(value: CreateSellerRequest) -> Result<Self, Self::Error> {
        let first_name = require(value.first_name, "first_name")?;
        let last_name = require(value.last_name, "last_name")?;
        let email = require(value.email, "email")?;
        let password = require(value.password, "password")?;
        Ok(Self::try_new(first_name, last_name, email, password)?)
    }
}

/// Request payload for updating a seller.
///
/// `id` may be echoed back by clients and is ignored; the path identifies
/// the record. There is no password field.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateSellerRequest {
    #[schema(example = "Igor")]
    pub first_name: Option<String>,
    #[schema(example = "Link")]
    pub last_name: Option<String>,
    #[schema(example = "igrlnk@gmail.com")]
    pub email: Option<String>,
    pub id: Option<i64>,
}

impl TryFrom<UpdateSellerRequest> for UpdateSellerInput {
    type Error = Error;

    fn try_from(value: UpdateSellerRequest) -> Result<Self, Self::Error> {
        let first_name = require(value.first_name, "first_name")?;
        let last_name = require(value.last_name, "last_name")?;
        let email = require(value.email, "email")?;
        Ok(Self::try_new(first_name, last_name, email)?)
    }
}

/// Path parameters naming one seller.
#[derive(Debug, Deserialize)]
pub struct SellerPath {
    pub seller_id: i64,
}

impl From<SellerPath> for SellerId {
    fn from(value: SellerPath) -> Self {
        Self::new(value.seller_id)
    }
}

/// Register the seller handlers and extractor error handlers on a scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use bookshop::inbound::http::sellers;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(sellers::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(create_seller)
        .service(list_sellers)
        .service(get_seller)
        .service(update_seller)
        .service(delete_seller);
}

/// Create a seller.
#[utoipa::path(
    post,
    path = "/api/v1/seller",
    request_body = CreateSellerRequest,
    responses(
        (status = 201, description = "Seller created", body = SellerView),
        (status = 422, description = "Invalid or missing fields", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["seller"],
    operation_id = "createSeller"
)]
#[post("/seller")]
pub async fn create_seller(
    state: web::Data<HttpState>,
    payload: web::Json<CreateSellerRequest>,
) -> ApiResult<HttpResponse> {
    let input = CreateSellerInput::try_from(payload.into_inner())?;
    let seller = state.sellers.create(input).await?;
    Ok(HttpResponse::Created().json(SellerView::from(seller)))
}

/// List every seller.
#[utoipa::path(
    get,
    path = "/api/v1/seller",
    responses(
        (status = 200, description = "All sellers", body = SellerListView),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["seller"],
    operation_id = "listSellers"
)]
#[get("/seller")]
pub async fn list_sellers(state: web::Data<HttpState>) -> ApiResult<web::Json<SellerListView>> {
    let sellers = state.sellers_query.list().await?;
    Ok(web::Json(SellerListView::from(sellers)))
}

/// Fetch one seller with the books it owns.
#[utoipa::path(
    get,
    path = "/api/v1/seller/{seller_id}",
    params(("seller_id" = i64, Path, description = "Seller identifier")),
    responses(
        (status = 200, description = "Seller with books", body = SellerWithBooksView),
        (status = 404, description = "No such seller; empty body"),
        (status = 422, description = "Non-integer seller id", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["seller"],
    operation_id = "getSeller"
)]
#[get("/seller/{seller_id}")]
pub async fn get_seller(
    state: web::Data<HttpState>,
    path: web::Path<SellerPath>,
) -> ApiResult<HttpResponse> {
    let id = SellerId::from(path.into_inner());
    match state.sellers_query.get_with_books(id).await? {
        Some(found) => Ok(HttpResponse::Ok().json(SellerWithBooksView::from(found))),
        None => {
            debug!(seller_id = %id, "seller not found");
            Ok(HttpResponse::NotFound().finish())
        }
    }
}

/// Replace a seller's names and email. The password is never changed.
#[utoipa::path(
    put,
    path = "/api/v1/seller/{seller_id}",
    params(("seller_id" = i64, Path, description = "Seller identifier")),
    request_body = UpdateSellerRequest,
    responses(
        (status = 200, description = "Seller updated", body = SellerView),
        (status = 404, description = "No such seller; empty body"),
        (status = 422, description = "Invalid or missing fields", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["seller"],
    operation_id = "updateSeller"
)]
#[put("/seller/{seller_id}")]
pub async fn update_seller(
    state: web::Data<HttpState>,
    path: web::Path<SellerPath>,
    payload: web::Json<UpdateSellerRequest>,
) -> ApiResult<HttpResponse> {
    let id = SellerId::from(path.into_inner());
    let changes = UpdateSellerInput::try_from(payload.into_inner())?;
    match state.sellers.update(id, changes).await? {
        Some(seller) => Ok(HttpResponse::Ok().json(SellerView::from(seller))),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Delete a seller and all of its books.
#[utoipa::path(
    delete,
    path = "/api/v1/seller/{seller_id}",
    params(("seller_id" = i64, Path, description = "Seller identifier")),
    responses(
        (status = 204, description = "Seller removed, or was already absent"),
        (status = 422, description = "Non-integer seller id", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["seller"],
    operation_id = "deleteSeller"
)]
#[delete("/seller/{seller_id}")]
pub async fn delete_seller(
    state: web::Data<HttpState>,
    path: web::Path<SellerPath>,
) -> ApiResult<HttpResponse> {
    state
        .sellers
        .delete(SellerId::from(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "sellers_tests.rs"]
mod tests;
