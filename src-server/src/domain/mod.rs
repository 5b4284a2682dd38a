//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO storage or HTTP dependencies.

mod entity;
mod item;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{Item, NewItem};
