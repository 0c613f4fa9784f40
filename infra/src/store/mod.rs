//! In-memory persistence.
//!
//! The product runs single-process against a single datastore; these
//! implementations are that datastore. Every repository trait from the
//! core crate has an implementation here, each a keyed map behind an
//! async RwLock.

mod memory;

pub use memory::{
    InMemoryAccountRepository, InMemoryEmotionLogRepository, InMemoryTaskRepository,
    InMemoryTokenStore,
};
