pub mod entity;

pub use entity::{by_episode_number, Episode};
