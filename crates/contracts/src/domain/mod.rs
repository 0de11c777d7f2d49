pub mod consumer;
pub mod delivery_person;
pub mod delivery_route;
