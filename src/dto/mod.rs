pub mod cars;
pub mod dealers;
pub mod inquiries;
