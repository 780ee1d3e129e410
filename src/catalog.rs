use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CatalogError;

/// The wand every round starts with.
pub const STARTER_TOOL: &str = "cracked wand";
/// Found once in the cave.
pub const CAVE_REWARD: &str = "wand of radiance";
/// Found lying in the forest.
pub const FOREST_WEAPON: &str = "steel sword";
/// Holding any of these means the cave has nothing left to give.
pub const END_GAME_TOOLS: &[&str] = &[CAVE_REWARD, "obsidian blade"];

// Trophies carry no power.
pub const HEALING_POTION: &str = "healing potion";
pub const GLOWING_AMULET: &str = "glowing amulet";
pub const GOLDEN_COINS: &str = "golden coins";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub power: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub power: u32,
    #[serde(default)]
    pub score: u32,
}

/// Read-only attribute tables for tools and creatures.
///
/// Built once at startup and handed to the game; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub tools: Vec<Tool>,
    pub creatures: Vec<Creature>,
}

impl Catalog {
    pub fn new(tools: Vec<Tool>, creatures: Vec<Creature>) -> Result<Self, CatalogError> {
        if creatures.is_empty() {
            return Err(CatalogError::NoCreatures);
        }
        Ok(Self { tools, creatures })
    }

    /// Power of a tool, 0 for anything the catalog doesn't list.
    pub fn tool_power(&self, name: &str) -> u32 {
        self.tools.iter().find(|t| t.name == name).map_or(0, |t| t.power)
    }

    pub fn creature(&self, name: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.name == name)
    }

    pub fn creature_names(&self) -> impl Iterator<Item = &str> {
        self.creatures.iter().map(|c| c.name.as_str())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw: Catalog = serde_json::from_str(&fs::read_to_string(path)?)?;
        Self::new(raw.tools, raw.creatures)
    }

    /// Load a catalog file, falling back to the built-in tables if it is missing or broken.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(
                    "Loaded catalog from {} ({} tools, {} creatures)",
                    path.display(),
                    catalog.tools.len(),
                    catalog.creatures.len()
                );
                catalog
            }
            Err(e) => {
                tracing::warn!("Failed to load catalog {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let tool = |name: &str, power| Tool { name: name.into(), power };
        let creature = |name: &str, power, score| Creature { name: name.into(), power, score };
        Self {
            tools: vec![
                tool(STARTER_TOOL, 2),
                tool(CAVE_REWARD, 10),
                tool(FOREST_WEAPON, 6),
                tool("obsidian blade", 12),
            ],
            creatures: vec![
                creature("shadow wolf", 10, 50),
                creature("fire imp", 5, 20),
                creature("rock titan", 7, 30),
                creature("spectral witch", 4, 15),
                creature("poison viper", 8, 40),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_has_zero_power() {
        let c = Catalog::default();
        assert_eq!(c.tool_power(GOLDEN_COINS), 0);
        assert_eq!(c.tool_power("obsidian blade"), 12);
    }

    #[test]
    fn empty_creature_list_rejected() {
        assert!(matches!(Catalog::new(vec![], vec![]), Err(CatalogError::NoCreatures)));
    }
}
