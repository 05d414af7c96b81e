mod combat;
mod view;

use crate::rng::MatchRng;
use crate::state::{Competitor, STARTING_GOLD, STARTING_HEALTH};
use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

/// Replays a fixed sequence of raw draws, wrapping at the end.
///
/// `gen_range(max)` reduces each value modulo `max`, so a script entry of 0
/// always selects the first option and 99 is a guaranteed miss on an item roll.
pub(crate) struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub(crate) fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far
    pub(crate) fn draws(&self) -> usize {
        self.cursor
    }
}

impl MatchRng for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

fn create_unit(id: u32, attack: i32, health: i32) -> Unit {
    Unit::new(UnitId(id), "Dummy", Trait::Geo, 1, attack, health)
}

fn create_trait_unit(id: u32, unit_trait: Trait, attack: i32, health: i32) -> Unit {
    Unit::new(UnitId(id), "Dummy", unit_trait, 1, attack, health)
}

fn create_template(name: &str, unit_trait: Trait, cost: u32, attack: i32, health: i32) -> UnitTemplate {
    UnitTemplate {
        name: name.to_string(),
        unit_trait,
        cost,
        stats: UnitStats { attack, health },
    }
}

fn create_item(id: u32, tier: ItemTier, attack: i32, health: i32) -> Item {
    Item {
        id: ItemId(id),
        name: "Trinket".to_string(),
        tier,
        attack,
        health,
    }
}

/// A competitor with the given units placed on battlefield slots 0, 1, ...
fn competitor_with(units: Vec<Unit>) -> Competitor {
    let mut competitor = Competitor::new(STARTING_HEALTH, STARTING_GOLD);
    for (slot, unit) in units.into_iter().enumerate() {
        competitor.battlefield[slot] = Some(unit);
    }
    competitor
}

/// Units across battlefield and bench
fn owned_unit_count(competitor: &Competitor) -> usize {
    competitor.battlefield_unit_count() + competitor.bench_unit_count()
}

fn assert_stats_restored(competitor: &Competitor) {
    for unit in competitor.battlefield.iter().flatten() {
        assert_eq!(unit.stats, unit.base, "unit {:?} not restored", unit.id);
        assert_eq!(unit.bonus, None);
    }
}
