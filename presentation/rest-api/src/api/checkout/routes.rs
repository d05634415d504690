use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::checkout::use_cases::place_order::{CheckoutParams, CheckoutUseCase};

use crate::api::checkout::dto::{CheckoutRequest, CheckoutSessionResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::OptionalFirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
}

impl CheckoutApi {
    pub fn new(checkout_use_case: Arc<dyn CheckoutUseCase>) -> Self {
        Self { checkout_use_case }
    }
}

#[OpenApi]
impl CheckoutApi {
    /// Check out the cart
    ///
    /// Reserves stock for every line, records a pending checkout session and
    /// clears the purchased lines from the cart.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn checkout(
        &self,
        auth: OptionalFirebaseBearer,
        body: Json<CheckoutRequest>,
    ) -> PlaceCheckoutResponse {
        let params = CheckoutParams {
            credential: auth.into_credential(),
            payment_method: body.0.payment_method,
        };

        match self.checkout_use_case.execute(params).await {
            Ok(session) => PlaceCheckoutResponse::Created(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceCheckoutResponse::BadRequest(json),
                    401 => PlaceCheckoutResponse::Unauthorized(json),
                    404 => PlaceCheckoutResponse::NotFound(json),
                    409 => PlaceCheckoutResponse::Conflict(json),
                    _ => PlaceCheckoutResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceCheckoutResponse {
    #[oai(status = 201)]
    Created(Json<CheckoutSessionResponse>),
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
