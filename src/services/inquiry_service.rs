use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

use crate::{
    dto::inquiries::CreateInquiryRequest,
    entity::inquiries::ActiveModel,
    error::{AppError, AppResult},
    models::Inquiry,
    state::AppState,
};

/// Validate and store a buyer inquiry. Whether the car and dealer exist is
/// left to the foreign keys.
pub async fn create_inquiry(state: &AppState, payload: CreateInquiryRequest) -> AppResult<Inquiry> {
    let inquiry = payload.validate().map_err(AppError::Validation)?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        car_id: Set(inquiry.car_id),
        dealer_id: Set(inquiry.dealer_id),
        name: Set(inquiry.name),
        phone: Set(inquiry.phone),
        message: Set(inquiry.message),
        created_at: Set(Utc::now().into()),
    };
    let stored = active.insert(&state.orm).await?;

    tracing::info!(
        inquiry_id = %stored.id,
        car_id = %stored.car_id,
        dealer_id = %stored.dealer_id,
        "inquiry received"
    );
    Ok(stored.into())
}
