pub mod credentials;
pub mod errors;
pub mod identity;
pub mod models;
pub mod ports;
pub mod service;
