pub mod app;
pub mod deserializers;
pub mod extractors;
pub mod routes;
