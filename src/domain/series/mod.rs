pub mod entity;

pub use entity::Series;
