//! Application services

mod fare_service;

pub use fare_service::FareService;
