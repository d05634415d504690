use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::snapshot::CartSnapshot;
use business::domain::cart::use_cases::add_line::{AddCartLineParams, AddCartLineUseCase};
use business::domain::cart::use_cases::get_snapshot::{
    GetCartSnapshotParams, GetCartSnapshotUseCase,
};
use business::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartLineQuantityParams, UpdateCartLineQuantityUseCase,
};

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::OptionalFirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_snapshot_use_case: Arc<dyn GetCartSnapshotUseCase>,
    add_line_use_case: Arc<dyn AddCartLineUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartLineQuantityUseCase>,
    remove_line_use_case: Arc<dyn RemoveCartLineUseCase>,
}

impl CartApi {
    pub fn new(
        get_snapshot_use_case: Arc<dyn GetCartSnapshotUseCase>,
        add_line_use_case: Arc<dyn AddCartLineUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartLineQuantityUseCase>,
        remove_line_use_case: Arc<dyn RemoveCartLineUseCase>,
    ) -> Self {
        Self {
            get_snapshot_use_case,
            add_line_use_case,
            update_quantity_use_case,
            remove_line_use_case,
        }
    }
}

fn parse_product_id(raw: &str) -> Result<Uuid, CartSnapshotResponse> {
    Uuid::parse_str(raw).map_err(|_| {
        CartSnapshotResponse::BadRequest(Json(ErrorResponse::new(
            "ValidationError",
            "cart.invalid_product_id",
        )))
    })
}

/// Shopping cart API
///
/// Every operation answers with the freshly recomputed cart.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the caller's cart priced against the current catalog.
    /// Without a valid identity the cart is empty.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self, auth: OptionalFirebaseBearer) -> CartSnapshotResponse {
        let params = GetCartSnapshotParams {
            credential: auth.into_credential(),
        };

        self.get_snapshot_use_case.execute(params).await.into()
    }

    /// Add a product to the cart
    ///
    /// Adds one unit, merging into the existing line for the product.
    /// Refused when stock cannot cover the new quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add(
        &self,
        auth: OptionalFirebaseBearer,
        body: Json<AddCartItemRequest>,
    ) -> CartSnapshotResponse {
        let product_id = match parse_product_id(&body.0.product_id) {
            Ok(id) => id,
            Err(response) => return response,
        };

        let params = AddCartLineParams {
            credential: auth.into_credential(),
            product_id,
        };

        self.add_line_use_case.execute(params).await.into()
    }

    /// Set a line's quantity
    ///
    /// A quantity of 0 removes the line.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update(
        &self,
        auth: OptionalFirebaseBearer,
        product_id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartSnapshotResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(response) => return response,
        };

        let params = UpdateCartLineQuantityParams {
            credential: auth.into_credential(),
            product_id,
            quantity: body.0.quantity,
        };

        self.update_quantity_use_case.execute(params).await.into()
    }

    /// Remove a line
    ///
    /// Removing a product that is not in the cart is not an error.
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove(
        &self,
        auth: OptionalFirebaseBearer,
        product_id: Path<String>,
    ) -> CartSnapshotResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(response) => return response,
        };

        let params = RemoveCartLineParams {
            credential: auth.into_credential(),
            product_id,
        };

        self.remove_line_use_case.execute(params).await.into()
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartSnapshotResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<Result<CartSnapshot, CartError>> for CartSnapshotResponse {
    fn from(result: Result<CartSnapshot, CartError>) -> Self {
        match result {
            Ok(snapshot) => CartSnapshotResponse::Ok(Json(snapshot.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartSnapshotResponse::BadRequest(json),
                    401 => CartSnapshotResponse::Unauthorized(json),
                    404 => CartSnapshotResponse::NotFound(json),
                    409 => CartSnapshotResponse::Conflict(json),
                    _ => CartSnapshotResponse::InternalError(json),
                }
            }
        }
    }
}
