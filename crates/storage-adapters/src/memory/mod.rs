//! # In-memory repositories
//!
//! Session-scoped storage. Nothing outlives the process.

mod community;
mod expression;
mod journal;

pub use community::InMemoryCommunityRepo;
pub use expression::InMemoryExpressionRepo;
pub use journal::InMemoryJournalRepo;
