// Tue Jan 13 2026 - Alex

use crate::structure::StructLayout;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Caller-owned table of layouts by name. Nothing in the crate keeps one
/// globally; build it once and pass it where it is needed.
pub struct LayoutRegistry {
    layouts: RwLock<HashMap<String, Arc<StructLayout>>>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self {
            layouts: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<StructLayout>> {
        self.layouts.read().get(name).cloned()
    }

    /// Registers `layout` under its own name, returning the layout it replaced.
    pub fn insert(&self, layout: Arc<StructLayout>) -> Option<Arc<StructLayout>> {
        self.layouts.write().insert(layout.name().to_string(), layout)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.layouts.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.layouts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.read().is_empty()
    }

    pub fn clear(&self) {
        self.layouts.write().clear();
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
