//! In-memory document
//!
//! Holds the content of mounted containers keyed by element id. Used for
//! server-side rendering (`inner_html`) and by tests that inspect the
//! rendered tree.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::dom::{to_html, Node};
use crate::domain::ports::{Container, Document};

type Slots = Arc<RwLock<HashMap<String, Vec<Node>>>>;

/// A document whose containers live in memory
#[derive(Clone, Default)]
pub struct InMemoryDocument {
    slots: Slots,
    mutations: Arc<AtomicUsize>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount an empty container; an existing one is left untouched
    pub fn mount(&self, id: &str) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.entry(id.to_string()).or_default();
    }

    /// Pre-populate with a mounted container, builder style
    pub fn with_container(self, id: &str) -> Self {
        self.mount(id);
        self
    }

    pub fn unmount(&self, id: &str) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.remove(id);
    }

    /// Current children of a container
    pub fn children(&self, id: &str) -> Option<Vec<Node>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(id).cloned()
    }

    pub fn text_content(&self, id: &str) -> Option<String> {
        self.children(id)
            .map(|nodes| nodes.iter().map(Node::text_content).collect())
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.children(id).map(|nodes| to_html(&nodes))
    }

    /// Number of content replacements across all containers
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }
}

impl Document for InMemoryDocument {
    type Container = MemoryContainer;

    fn element_by_id(&self, id: &str) -> Option<MemoryContainer> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.contains_key(id).then(|| MemoryContainer {
            id: id.to_string(),
            slots: self.slots.clone(),
            mutations: self.mutations.clone(),
        })
    }
}

/// Handle to one mounted container
pub struct MemoryContainer {
    id: String,
    slots: Slots,
    mutations: Arc<AtomicUsize>,
}

impl MemoryContainer {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Container for MemoryContainer {
    fn replace_children(&self, nodes: Vec<Node>) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        // Unmounted while a render was in flight: the write goes nowhere
        if let Some(children) = slots.get_mut(&self.id) {
            *children = nodes;
            self.mutations.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn set_text_content(&self, text: &str) {
        self.replace_children(vec![Node::text(text)]);
    }
}
