// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_store;
pub mod statistics_service;


pub use catalog_store::CatalogStore;
pub use statistics_service::StatisticsService;
