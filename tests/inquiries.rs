mod common;

use avtouz_api::{
    dto::inquiries::CreateInquiryRequest, entity::enums::Region, error::AppError,
    services::inquiry_service,
};
use common::{CarFixture, insert_car, insert_dealer, setup_state};

#[tokio::test]
async fn stores_inquiry_with_generated_id_and_timestamp() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let dealer = insert_dealer(&state, "Inquiry Motors", true, Region::Samarqand).await?;
    let car = insert_car(&state, &dealer, CarFixture::new("Chevrolet", "Gentra")).await?;

    let inquiry = inquiry_service::create_inquiry(
        &state,
        CreateInquiryRequest {
            car_id: Some(car.id.to_string().into()),
            dealer_id: Some(dealer.id.to_string().into()),
            name: Some("Dilshod".into()),
            phone: Some("901234567".into()),
            message: Some("Hali sotuvdami?".into()),
        },
    )
    .await?;

    assert_eq!(inquiry.car_id, car.id);
    assert_eq!(inquiry.dealer_id, dealer.id);
    assert_eq!(inquiry.name, "Dilshod");
    assert_eq!(inquiry.message.as_deref(), Some("Hali sotuvdami?"));
    assert!(!inquiry.id.is_nil());
    Ok(())
}

#[tokio::test]
async fn rejects_short_name_and_phone_together() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let dealer = insert_dealer(&state, "Strict Motors", true, Region::Samarqand).await?;
    let car = insert_car(&state, &dealer, CarFixture::new("Chevrolet", "Nexia")).await?;

    let result = inquiry_service::create_inquiry(
        &state,
        CreateInquiryRequest {
            car_id: Some(car.id.to_string().into()),
            dealer_id: Some(dealer.id.to_string().into()),
            name: Some("D".into()),
            phone: Some("12345".into()),
            message: None,
        },
    )
    .await;

    match result {
        Err(AppError::Validation(errors)) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, ["name", "phone"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    Ok(())
}
