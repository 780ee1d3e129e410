use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// The player's backpack: item names in the order they were picked up.
///
/// Duplicates are allowed (coins pile up); the encounter rules decide when an
/// item may only be held once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { items: items.into_iter().map(Into::into).collect() }
    }

    pub fn add(&mut self, item: &str) {
        self.items.push(item.to_string());
    }

    /// Remove the first copy of `item`. Returns false (and does nothing) if it isn't held.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|it| it == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|it| it == item)
    }

    pub fn contains_any(&self, items: &[&str]) -> bool {
        items.iter().any(|item| self.contains(item))
    }

    /// Drop `discard` if held, then pick up `reward`. Returns whether anything was discarded.
    pub fn swap_in(&mut self, discard: &str, reward: &str) -> bool {
        let discarded = self.remove(discard);
        self.add(reward);
        discarded
    }

    /// Items paired with their catalog power, in pickup order. Recomputed on every call.
    pub fn list_with_power<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        self.items.iter().map(|it| (it.as_str(), catalog.tool_power(it)))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_missing_is_noop() {
        let mut inv = Inventory::with_items(["golden coins"]);
        assert!(!inv.remove("steel sword"));
        assert_eq!(inv.items(), ["golden coins"]);
    }

    #[test]
    fn remove_takes_first_copy_only() {
        let mut inv = Inventory::with_items(["golden coins", "glowing amulet", "golden coins"]);
        assert!(inv.remove("golden coins"));
        assert_eq!(inv.items(), ["glowing amulet", "golden coins"]);
    }
}
