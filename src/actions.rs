use rand::Rng;
use rand::seq::IndexedRandom;

use crate::catalog::{
    CAVE_REWARD, Catalog, Creature, END_GAME_TOOLS, FOREST_WEAPON, GLOWING_AMULET, GOLDEN_COINS,
    HEALING_POTION, STARTER_TOOL,
};
use crate::inventory::Inventory;
use crate::ledger::Ledger;

// Cave

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaveOutcome {
    /// Already holding an end-game tool; nothing left to find.
    Empty,
    Found { discarded_starter: bool },
}

pub fn explore_cave(inv: &mut Inventory) -> CaveOutcome {
    if inv.contains_any(END_GAME_TOOLS) {
        tracing::debug!("Cave already looted");
        return CaveOutcome::Empty;
    }
    let discarded_starter = inv.swap_in(STARTER_TOOL, CAVE_REWARD);
    tracing::debug!(discarded_starter, "Cave yields {}", CAVE_REWARD);
    CaveOutcome::Found { discarded_starter }
}

// Forest

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestEvent {
    HealingPotion,
    GlowingAmulet,
    GoldenCoins,
    SteelSword,
    StrangeNoises,
}

pub const FOREST_EVENTS: &[ForestEvent] = &[
    ForestEvent::HealingPotion,
    ForestEvent::GlowingAmulet,
    ForestEvent::GoldenCoins,
    ForestEvent::SteelSword,
    ForestEvent::StrangeNoises,
];

impl ForestEvent {
    pub fn narration(&self) -> &'static str {
        match self {
            ForestEvent::HealingPotion => "You find a healing potion hidden under a bush!",
            ForestEvent::GlowingAmulet => {
                "You encounter a friendly sprite who gives you a glowing amulet!"
            }
            ForestEvent::GoldenCoins => {
                "You stumble upon a treasure chest filled with golden coins!"
            }
            ForestEvent::SteelSword => "You find a steel sword lying on the ground!",
            ForestEvent::StrangeNoises => "You hear strange noises but find nothing unusual.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestOutcome {
    pub event: ForestEvent,
    pub added: Option<&'static str>,
    pub discarded: Option<&'static str>,
}

pub fn explore_forest<R: Rng + ?Sized>(inv: &mut Inventory, rng: &mut R) -> ForestOutcome {
    let event = FOREST_EVENTS.choose(rng).copied().unwrap_or(ForestEvent::StrangeNoises);
    tracing::debug!(?event, "Forest event drawn");
    apply_forest_event(inv, event)
}

/// Apply a forest event to the backpack. Deterministic; the draw happens in `explore_forest`.
pub fn apply_forest_event(inv: &mut Inventory, event: ForestEvent) -> ForestOutcome {
    let mut outcome = ForestOutcome { event, added: None, discarded: None };
    match event {
        ForestEvent::HealingPotion => {
            if !inv.contains(HEALING_POTION) {
                inv.add(HEALING_POTION);
                outcome.added = Some(HEALING_POTION);
            }
        }
        ForestEvent::GlowingAmulet => {
            inv.add(GLOWING_AMULET);
            outcome.added = Some(GLOWING_AMULET);
        }
        ForestEvent::GoldenCoins => {
            inv.add(GOLDEN_COINS);
            outcome.added = Some(GOLDEN_COINS);
        }
        ForestEvent::SteelSword => {
            if inv.swap_in(STARTER_TOOL, FOREST_WEAPON) {
                outcome.discarded = Some(STARTER_TOOL);
            }
            outcome.added = Some(FOREST_WEAPON);
        }
        ForestEvent::StrangeNoises => {}
    }
    outcome
}

// House

/// The creature behind the house door: the pinned one if still valid, otherwise a fresh draw
/// that becomes pinned. `None` only when the catalog has no creatures at all.
pub fn choose_creature<R: Rng + ?Sized>(
    pinned: &mut Option<String>,
    catalog: &Catalog,
    rng: &mut R,
) -> Option<Creature> {
    if let Some(name) = pinned.as_deref()
        && let Some(creature) = catalog.creature(name)
    {
        return Some(creature.clone());
    }
    let creature = catalog.creatures.choose(rng)?.clone();
    tracing::debug!(creature = %creature.name, power = creature.power, "Creature drawn");
    *pinned = Some(creature.name.clone());
    Some(creature)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatResult {
    Win,
    Loss,
}

/// Weapon against creature. A tie goes to the player.
pub fn resolve_combat(tool_power: u32, creature_power: u32) -> CombatResult {
    if tool_power >= creature_power {
        CombatResult::Win
    } else {
        CombatResult::Loss
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightOutcome {
    Victory { gained: u32, score: u32, reached_target: bool },
    /// Hurt but still standing; the player falls back to the field.
    Wounded { damage: u32, hit_points: i32 },
    Defeated { hit_points: i32 },
}

pub fn fight(
    ledger: &mut Ledger,
    creature: &Creature,
    weapon_power: u32,
    damage: u32,
    target_score: u32,
) -> FightOutcome {
    let outcome = match resolve_combat(weapon_power, creature.power) {
        CombatResult::Win => {
            ledger.award(creature.score);
            FightOutcome::Victory {
                gained: creature.score,
                score: ledger.score,
                reached_target: ledger.has_won(target_score),
            }
        }
        CombatResult::Loss => {
            if ledger.apply_damage(damage) {
                FightOutcome::Defeated { hit_points: ledger.hit_points }
            } else {
                FightOutcome::Wounded { damage, hit_points: ledger.hit_points }
            }
        }
    };
    tracing::debug!(creature = %creature.name, weapon_power, ?outcome, "Fight resolved");
    outcome
}
