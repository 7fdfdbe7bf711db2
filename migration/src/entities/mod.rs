pub mod airport;
pub mod city;
pub mod country;

pub use airport::Entity as AirportEntity;
pub use city::Entity as CityEntity;
pub use country::Entity as CountryEntity;
