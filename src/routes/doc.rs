use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::inquiries::CreateInquiryRequest,
    entity::enums::{BodyType, CarStatus, FuelType, Region, Transmission},
    models::{Car, CarWithDealer, Dealer, DealerWithCarCount, Inquiry, Stats},
    response::{ErrorResponse, FieldError},
    routes::{cars, dealers, health, inquiries, stats},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        stats::get_stats,
        cars::list_cars,
        cars::get_car,
        dealers::list_dealers,
        dealers::get_dealer,
        dealers::list_dealer_cars,
        inquiries::create_inquiry
    ),
    components(
        schemas(
            Car,
            CarWithDealer,
            Dealer,
            DealerWithCarCount,
            Inquiry,
            Stats,
            CreateInquiryRequest,
            FuelType,
            Transmission,
            BodyType,
            CarStatus,
            Region,
            ErrorResponse,
            FieldError,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Stats", description = "Marketplace counters"),
        (name = "Cars", description = "Car listing endpoints"),
        (name = "Dealers", description = "Dealer endpoints"),
        (name = "Inquiries", description = "Buyer inquiry endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
