//! # Resource Library
//!
//! Read-only catalogue of curated articles and tools, filtered by category
//! and a free-text search term.

use domains::{DomainError, Resource, ResourceCategory, ResourceId, Result};

#[derive(Debug, Clone, Default)]
pub struct ResourceLibrary {
    resources: Vec<Resource>,
}

impl ResourceLibrary {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn all(&self) -> &[Resource] {
        &self.resources
    }

    /// `category: None` matches every category. The search term is
    /// untrusted user input and is matched case-insensitively against the
    /// title and description only.
    pub fn filter(&self, category: Option<ResourceCategory>, search: &str) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| category.map_or(true, |wanted| wanted == r.category))
            .filter(|r| r.matches(search))
            .collect()
    }

    pub fn get(&self, id: &ResourceId) -> Result<&Resource> {
        self.resources
            .iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| DomainError::not_found("Resource", id.as_str()))
    }
}
