//! # storage-adapters
//!
//! Implementations of the `domains` ports: in-memory repositories, curated
//! seed content, and the system clock / id / reply adapters.

pub mod memory;
pub mod seed;
pub mod system;

pub use seed::{SeedError, SeedResult};
pub use system::{FixedSupportPolicy, RandomReplies, SystemClock, UuidV7Ids};
