use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::{
    dto::inquiries::CreateInquiryRequest,
    error::AppResult,
    middleware::extract::ValidJson,
    models::Inquiry,
    response::ErrorResponse,
    services::inquiry_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_inquiry))
}

#[utoipa::path(
    post,
    path = "/api/inquiries",
    request_body = CreateInquiryRequest,
    responses(
        (status = 201, description = "Inquiry stored", body = Inquiry),
        (status = 400, description = "Invalid inquiry data, one entry per field", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
    tag = "Inquiries"
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateInquiryRequest>,
) -> AppResult<(StatusCode, Json<Inquiry>)> {
    let inquiry = inquiry_service::create_inquiry(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}
