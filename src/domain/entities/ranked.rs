use serde::Serialize;

/// Output of a ranking pipeline: the surviving items plus a note for every
/// source or record that was skipped along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<T> {
    pub items: Vec<T>,
    pub warnings: Vec<String>,
}

impl<T> Ranked<T> {
    pub fn new(items: Vec<T>, warnings: Vec<String>) -> Self {
        Self { items, warnings }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Ranked<T> {
    fn default() -> Self {
        Self::empty()
    }
}
