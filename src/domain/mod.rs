// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Records are plain typed structs. The store persists them as supplied and
// never validates field contents; that belongs to the caller.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod episode;
pub mod identity;
pub mod movie;
pub mod series;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use episode::{by_episode_number, Episode};
pub use identity::{generate_id, now_millis};
pub use movie::Movie;
pub use series::Series;

// Statistics Domain (Derived Data)
pub use statistics::{DashboardStats, DEFAULT_EPISODE_VIEW_WEIGHT};
