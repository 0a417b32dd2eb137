use avtouz_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{cars::NewCar, dealers::NewDealer},
    entity::enums::{BodyType, CarStatus, FuelType, Region, Transmission},
    services::{car_service, dealer_service},
    state::AppState,
};
use rust_decimal::Decimal;
use uuid::Uuid;

struct DealerSeed {
    name: &'static str,
    phone: &'static str,
    address: &'static str,
    city: &'static str,
    region: Region,
    verified: bool,
    rating: Decimal,
}

struct CarSeed {
    make: &'static str,
    model: &'static str,
    year: i32,
    price: i32,
    mileage: i32,
    fuel_type: FuelType,
    transmission: Transmission,
    body_type: BodyType,
    color: &'static str,
    engine_size: Option<Decimal>,
    featured: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    // Ensure migrations are applied.
    run_migrations(&config.database_url).await?;
    let orm = create_orm_conn(&config.database_url, 1).await?;
    let state = AppState { orm };

    let dealers = [
        DealerSeed {
            name: "Toshkent Avto Savdo",
            phone: "+998712001122",
            address: "Amir Temur ko'chasi 108",
            city: "Toshkent",
            region: Region::ToshkentShahri,
            verified: true,
            rating: Decimal::new(48, 1),
        },
        DealerSeed {
            name: "Samarqand Motors",
            phone: "+998662334455",
            address: "Registon ko'chasi 12",
            city: "Samarqand",
            region: Region::Samarqand,
            verified: true,
            rating: Decimal::new(45, 1),
        },
        DealerSeed {
            name: "Farg'ona Auto Market",
            phone: "+998732556677",
            address: "Mustaqillik ko'chasi 5",
            city: "Farg'ona",
            region: Region::Fargona,
            verified: false,
            rating: Decimal::new(39, 1),
        },
    ];

    let cars = [
        CarSeed {
            make: "Chevrolet",
            model: "Cobalt",
            year: 2022,
            price: 12500,
            mileage: 18000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            body_type: BodyType::Sedan,
            color: "White",
            engine_size: Some(Decimal::new(15, 1)),
            featured: true,
        },
        CarSeed {
            make: "Chevrolet",
            model: "Tracker",
            year: 2023,
            price: 21000,
            mileage: 6000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            body_type: BodyType::Suv,
            color: "Black",
            engine_size: Some(Decimal::new(12, 1)),
            featured: false,
        },
        CarSeed {
            make: "BYD",
            model: "Song Plus",
            year: 2024,
            price: 32000,
            mileage: 1500,
            fuel_type: FuelType::Hybrid,
            transmission: Transmission::Automatic,
            body_type: BodyType::Suv,
            color: "Grey",
            engine_size: Some(Decimal::new(15, 1)),
            featured: true,
        },
        CarSeed {
            make: "Lada",
            model: "Granta",
            year: 2019,
            price: 7800,
            mileage: 64000,
            fuel_type: FuelType::Gas,
            transmission: Transmission::Manual,
            body_type: BodyType::Sedan,
            color: "Silver",
            engine_size: Some(Decimal::new(16, 1)),
            featured: false,
        },
    ];

    let mut created = 0;
    for (index, seed) in dealers.iter().enumerate() {
        let slug = dealer_service::slugify(seed.name);
        if dealer_service::get_dealer_by_slug(&state, &slug).await?.is_some() {
            println!("Dealer {slug} already seeded, skipping");
            continue;
        }

        let dealer = dealer_service::create_dealer(
            &state,
            NewDealer {
                name: seed.name.to_string(),
                slug: Some(slug),
                description: None,
                phone: seed.phone.to_string(),
                address: seed.address.to_string(),
                city: seed.city.to_string(),
                region: seed.region,
                logo_url: None,
                verified: seed.verified,
                rating: seed.rating,
                total_sales: 0,
            },
        )
        .await?;

        // Rotate the catalog so every dealer gets a different mix.
        for car in cars.iter().cycle().skip(index).take(3) {
            car_service::create_car(&state, new_car(dealer.id, seed, car)).await?;
            created += 1;
        }
    }

    println!("Seed completed. Cars created: {created}");
    Ok(())
}

fn new_car(dealer_id: Uuid, dealer: &DealerSeed, car: &CarSeed) -> NewCar {
    NewCar {
        dealer_id,
        make: car.make.to_string(),
        model: car.model.to_string(),
        year: car.year,
        price: car.price,
        mileage: car.mileage,
        fuel_type: car.fuel_type,
        transmission: car.transmission,
        body_type: car.body_type,
        color: car.color.to_string(),
        engine_size: car.engine_size,
        description: None,
        image_url: None,
        images: None,
        status: CarStatus::Available,
        featured: car.featured,
        city: dealer.city.to_string(),
        region: dealer.region,
    }
}
