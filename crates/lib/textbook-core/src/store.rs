//! In-memory stores built once at startup and immutable afterwards.

use std::collections::HashMap;
use std::hash::Hash;

/// Per-page extracted text keyed by page number.
#[derive(Debug, Clone, Default)]
pub struct PageStore {
    pages: HashMap<u32, String>,
}

impl PageStore {
    #[must_use]
    pub fn new(pages: impl IntoIterator<Item = (u32, String)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
        }
    }

    /// Looks up the extracted text for a page. Absent pages are simply not
    /// found; the caller decides how to render the gap.
    #[must_use]
    pub fn lookup(&self, page: u32) -> Option<&str> {
        self.pages.get(&page).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Insertion-ordered unit store with exact-match key lookup.
#[derive(Debug, Clone)]
pub struct UnitStore<K, U> {
    units: Vec<U>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Copy, U> UnitStore<K, U> {
    /// Builds the store, preserving the order entries arrive in.
    ///
    /// # Errors
    /// Returns the offending key when two units share one.
    pub fn build(entries: impl IntoIterator<Item = (K, U)>) -> Result<Self, K> {
        let mut units = Vec::new();
        let mut index = HashMap::new();
        for (key, unit) in entries {
            if index.insert(key, units.len()).is_some() {
                return Err(key);
            }
            units.push(unit);
        }
        Ok(Self { units, index })
    }

    #[must_use]
    pub fn get(&self, key: K) -> Option<&U> {
        self.index.get(&key).and_then(|&slot| self.units.get(slot))
    }

    /// Units in load order.
    pub fn units(&self) -> impl Iterator<Item = &U> {
        self.units.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
