//! Data structures (entities and request bodies) for both resources.

pub mod menu_item;
pub mod vehicle;

pub use menu_item::*;
pub use vehicle::*;
