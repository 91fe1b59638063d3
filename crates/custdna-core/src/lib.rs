//! Customer DNA Core
//!
//! Core types, traits, and utilities shared across Customer DNA components.
//!
//! This crate provides:
//! - The interaction record and customer data model
//! - The fixed sentiment vocabulary and its polarity buckets
//! - Error types and result handling
//! - Replaceable random sources for the inference rules
//! - The persistence collaborator trait

pub mod error;
pub mod random;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use store::{CustomerStore, InMemoryStore};
pub use types::{Bucket, Channel, Customer, InteractionRecord, NewCustomer, RawInteraction, Sentiment};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::random::{RandomSource, ScriptedRandom, StdRandom};
    pub use crate::store::CustomerStore;
    pub use crate::types::{Bucket, Channel, Customer, InteractionRecord, RawInteraction, Sentiment};
}
