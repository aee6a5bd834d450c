#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::data::{self, FileItem};

/// Dashboard state: the in-memory file/folder list.
#[derive(Clone, Debug, Default)]
pub struct FilesState {
    pub items: Vec<FileItem>,
}

impl FilesState {
    /// The state every session starts with: the mock file grid.
    #[must_use]
    pub fn seeded() -> Self {
        Self { items: data::mock_files() }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FileItem> {
        self.items.iter().find(|f| f.id == id)
    }

    /// Remove an item by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|f| f.id != id);
        self.items.len() != before
    }

    /// Rename an item. Returns whether the item existed.
    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        if let Some(item) = self.items.iter_mut().find(|f| f.id == id) {
            item.name = name.to_owned();
            true
        } else {
            false
        }
    }
}
