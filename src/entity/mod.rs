pub mod cars;
pub mod dealers;
pub mod enums;
pub mod inquiries;

pub use cars::Entity as Cars;
pub use dealers::Entity as Dealers;
pub use inquiries::Entity as Inquiries;
