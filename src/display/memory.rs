//! In-memory display target.

use super::DisplayTarget;
use std::sync::{Arc, RwLock};

/// Shared in-memory surface.
///
/// Clones share the same content, so one handle can be given to the poller
/// and another to a reader such as the HTTP mirror.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    id: Arc<str>,
    content: Arc<RwLock<String>>,
}

impl MemoryDisplay {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            content: Arc::new(RwLock::new(String::new())),
        }
    }

    /// Current content of the surface.
    pub fn content(&self) -> String {
        match self.content.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DisplayTarget for MemoryDisplay {
    fn id(&self) -> &str {
        &self.id
    }

    fn show(&self, text: &str) {
        let mut guard = match self.content.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clear();
        guard.push_str(text);
    }
}
