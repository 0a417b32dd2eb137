mod common;

use avtouz_api::{
    dto::dealers::NewDealer,
    entity::enums::{CarStatus, Region},
    error::AppError,
    services::dealer_service,
};
use common::{CarFixture, insert_car, insert_dealer, setup_state};
use rust_decimal::Decimal;

fn new_dealer(name: &str) -> NewDealer {
    NewDealer {
        name: name.to_string(),
        slug: None,
        description: Some("Rasmiy diler".into()),
        phone: "+998712223344".into(),
        address: "Bobur ko'chasi 7".into(),
        city: "Buxoro".into(),
        region: Region::Buxoro,
        logo_url: None,
        verified: false,
        rating: Decimal::new(42, 1),
        total_sales: 12,
    }
}

#[tokio::test]
async fn verified_dealers_come_first_then_by_name() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_dealer(&state, "Zafar Avto", true, Region::Samarqand).await?;
    insert_dealer(&state, "Alfa Motors", false, Region::Buxoro).await?;
    insert_dealer(&state, "Baraka Cars", true, Region::Samarqand).await?;
    insert_dealer(&state, "Omad Savdo", false, Region::Xorazm).await?;

    let dealers = dealer_service::list_dealers(&state).await?;
    let names: Vec<_> = dealers.iter().map(|d| d.dealer.name.as_str()).collect();
    assert_eq!(names, ["Baraka Cars", "Zafar Avto", "Alfa Motors", "Omad Savdo"]);
    Ok(())
}

#[tokio::test]
async fn car_count_includes_every_status() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let busy = insert_dealer(&state, "Busy Dealer", true, Region::Andijon).await?;
    let idle = insert_dealer(&state, "Idle Dealer", true, Region::Andijon).await?;
    insert_car(&state, &busy, CarFixture::new("Kia", "K5")).await?;
    insert_car(
        &state,
        &busy,
        CarFixture::new("Kia", "K8").status(CarStatus::Sold),
    )
    .await?;
    insert_car(
        &state,
        &busy,
        CarFixture::new("Kia", "K9").status(CarStatus::Reserved),
    )
    .await?;

    let dealers = dealer_service::list_dealers(&state).await?;
    let count_of = |name: &str| {
        dealers
            .iter()
            .find(|d| d.dealer.name == name)
            .map(|d| d.car_count)
    };
    assert_eq!(count_of("Busy Dealer"), Some(3));
    assert_eq!(count_of("Idle Dealer"), Some(0));

    let by_slug = dealer_service::get_dealer_by_slug(&state, &busy.slug)
        .await?
        .expect("dealer exists");
    assert_eq!(by_slug.dealer.id, busy.id);
    assert_eq!(by_slug.car_count, 3);

    let idle_by_slug = dealer_service::get_dealer_by_slug(&state, &idle.slug)
        .await?
        .expect("dealer exists");
    assert_eq!(idle_by_slug.car_count, 0);
    Ok(())
}

#[tokio::test]
async fn unknown_slug_is_none() -> anyhow::Result<()> {
    let state = setup_state().await?;
    assert!(dealer_service::get_dealer_by_slug(&state, "ghost").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn create_dealer_derives_slug_from_name() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let dealer = dealer_service::create_dealer(&state, new_dealer("Buxoro Avto Markaz")).await?;
    assert_eq!(dealer.slug, "buxoro-avto-markaz");
    assert!(!dealer.verified);
    assert_eq!(dealer.total_sales, 12);

    let found = dealer_service::get_dealer_by_id(&state, dealer.id)
        .await?
        .expect("stored");
    assert_eq!(found.slug, dealer.slug);
    Ok(())
}

#[tokio::test]
async fn create_dealer_rejects_out_of_range_values() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let result = dealer_service::create_dealer(
        &state,
        NewDealer {
            rating: Decimal::new(51, 1),
            total_sales: -3,
            ..new_dealer("Bad Numbers")
        },
    )
    .await;
    match result {
        Err(AppError::Validation(errors)) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, ["rating", "totalSales"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let unsluggable = dealer_service::create_dealer(&state, new_dealer("!!!")).await;
    assert!(matches!(unsluggable, Err(AppError::Validation(_))));
    Ok(())
}
