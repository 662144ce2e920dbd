use crate::domain::model::Project;
use std::sync::{Arc, Mutex, PoisonError};

/// Process-lifetime, append-only project collection. Insertion order is
/// preserved and duplicates are allowed. Clones share the same underlying
/// list, so one handle per router state is enough.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Arc<Mutex<Vec<Project>>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, project: Project) {
        self.projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(project);
    }

    /// Snapshot of the full contents, in insertion order.
    pub fn list(&self) -> Vec<Project> {
        self.projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
