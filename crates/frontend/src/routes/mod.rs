pub mod routes;
pub mod screens;
