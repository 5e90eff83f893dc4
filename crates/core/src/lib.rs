//! Core business logic for socialgraph.
//!
//! The relationship rules live in [`RelationshipService`]; everything it
//! knows about existing edges comes through the [`RelationStore`] trait.

pub mod memory;
pub mod services;
pub mod store;

pub use memory::MemoryRelationStore;
pub use services::*;
pub use store::{RelationStore, RelationStoreRef};
