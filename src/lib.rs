pub mod app;
pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod logging;
pub mod selection;
pub mod spin;
