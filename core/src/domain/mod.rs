//! Domain layer containing entities and value types

pub mod entities;

pub use entities::*;
