// src/domain/statistics/mod.rs
//
// Statistics Domain
//
// Statistics are DERIVED data: never stored, always recomputed from the
// collections.

pub mod entity;

pub use entity::{DashboardStats, DEFAULT_EPISODE_VIEW_WEIGHT};
