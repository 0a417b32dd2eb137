mod common;

use avtouz_api::{entity::enums::{CarStatus, Region}, services::stats_service};
use common::{CarFixture, insert_car, insert_dealer, setup_state};

#[tokio::test]
async fn empty_store_has_zero_counts() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let stats = stats_service::get_stats(&state).await?;
    assert_eq!(stats.total_cars, 0);
    assert_eq!(stats.total_dealers, 0);
    assert_eq!(stats.total_regions, 0);
    Ok(())
}

#[tokio::test]
async fn counts_available_cars_verified_dealers_and_dealer_regions() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let verified = insert_dealer(&state, "Verified One", true, Region::Samarqand).await?;
    insert_dealer(&state, "Verified Two", true, Region::Samarqand).await?;
    let unverified = insert_dealer(&state, "Newcomer", false, Region::Xorazm).await?;

    insert_car(&state, &verified, CarFixture::new("Kia", "K5")).await?;
    insert_car(
        &state,
        &verified,
        CarFixture::new("Kia", "K8").status(CarStatus::Sold),
    )
    .await?;
    // Car regions do not count towards the region total.
    insert_car(
        &state,
        &unverified,
        CarFixture::new("Lada", "Vesta").region(Region::Navoiy),
    )
    .await?;
    insert_car(
        &state,
        &unverified,
        CarFixture::new("Lada", "Largus").status(CarStatus::Reserved),
    )
    .await?;

    let stats = stats_service::get_stats(&state).await?;
    assert_eq!(stats.total_cars, 2);
    assert_eq!(stats.total_dealers, 2);
    assert_eq!(stats.total_regions, 2);
    Ok(())
}
