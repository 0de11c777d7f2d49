pub mod consumers;
pub mod delivery_persons;
pub mod delivery_routes;
