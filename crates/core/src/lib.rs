//! `trove-core` — catalog domain building blocks.
//!
//! This crate contains **pure domain** primitives (no storage or transport
//! concerns): the item model, the partial-update patch type, the shared
//! response envelope, and the domain error model.

pub mod envelope;
pub mod error;
pub mod id;
pub mod item;

pub use envelope::ApiEnvelope;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use item::{Item, ItemPatch, ItemType, MAX_ADDITIONAL_IMAGES};
