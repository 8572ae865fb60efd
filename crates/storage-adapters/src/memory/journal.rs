//! In-memory journal.

use domains::{DomainError, JournalEntry, JournalRepository, Result};

/// Most recent entry first.
#[derive(Debug, Default)]
pub struct InMemoryJournalRepo {
    entries: Vec<JournalEntry>,
}

impl InMemoryJournalRepo {
    /// `seed` is already most-recent-first.
    pub fn with_seed(seed: Vec<JournalEntry>) -> Result<Self> {
        let mut repo = Self::default();
        for entry in seed {
            repo.ensure_unique(&entry)?;
            repo.entries.push(entry);
        }
        Ok(repo)
    }

    fn ensure_unique(&self, entry: &JournalEntry) -> Result<()> {
        if self.entries.iter().any(|e| e.id() == entry.id()) {
            return Err(DomainError::Conflict(format!(
                "journal entry {} already exists",
                entry.id()
            )));
        }
        Ok(())
    }
}

impl JournalRepository for InMemoryJournalRepo {
    fn list_entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    fn insert_entry(&mut self, entry: JournalEntry) -> Result<()> {
        self.ensure_unique(&entry)?;
        self.entries.insert(0, entry);
        Ok(())
    }
}
