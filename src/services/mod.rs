pub mod car_service;
pub mod dealer_service;
pub mod inquiry_service;
pub mod stats_service;
