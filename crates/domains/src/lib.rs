//! solace/crates/domains/src/lib.rs
//!
//! The central domain model and interface definitions for Solace.

pub mod errors;
pub mod models;
pub mod ports;
pub mod time;

// Re-exporting for easier access in other crates
pub use errors::*;
pub use models::*;
pub use ports::*;
pub use time::relative_age;

#[cfg(test)]
mod tests {
    use super::models::*;
    use chrono::Utc;

    #[test]
    fn test_post_serializes_mood_as_key() {
        let post = Post::new(
            PostId::new("1"),
            "Hello Rust!",
            Some(MoodTag::Hopeful),
            Utc::now(),
            true,
        )
        .unwrap();
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["mood"], "hopeful");
        assert_eq!(json["reactions"], 0);
    }
}
