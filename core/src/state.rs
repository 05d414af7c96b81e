use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::shop::Shop;
use crate::types::{Item, Unit};

/// Number of battlefield slots
pub const BATTLEFIELD_SIZE: usize = 7;
/// Number of bench slots
pub const BENCH_SIZE: usize = 7;
/// Starting health
pub const STARTING_HEALTH: i32 = 100;
/// Starting gold
pub const STARTING_GOLD: u32 = 10;
/// Starting level
pub const STARTING_LEVEL: u32 = 1;
/// Highest reachable level
pub const MAX_LEVEL: u32 = 9;
/// Exchanges allowed in one round before it is called a draw
pub const DEFAULT_MAX_EXCHANGES: u32 = 500;

/// Runtime settings for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    /// Seed for the match RNG
    pub seed: u64,
    pub starting_health: i32,
    pub starting_gold: u32,
    pub max_exchanges: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_health: STARTING_HEALTH,
            starting_gold: STARTING_GOLD,
            max_exchanges: DEFAULT_MAX_EXCHANGES,
        }
    }
}

/// Board zone a slot belongs to
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Zone {
    Battlefield,
    Bench,
}

impl Zone {
    pub const fn capacity(self) -> usize {
        match self {
            Zone::Battlefield => BATTLEFIELD_SIZE,
            Zone::Bench => BENCH_SIZE,
        }
    }
}

/// A slot address: zone plus in-zone index
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub zone: Zone,
    pub index: u32,
}

impl Slot {
    pub const fn battlefield(index: u32) -> Self {
        Self {
            zone: Zone::Battlefield,
            index,
        }
    }

    pub const fn bench(index: u32) -> Self {
        Self {
            zone: Zone::Bench,
            index,
        }
    }

    /// The in-zone index, or `InvalidIndex` if it exceeds the zone's capacity.
    pub fn checked_index(&self) -> GameResult<usize> {
        let index = self.index as usize;
        if index >= self.zone.capacity() {
            return Err(GameError::InvalidIndex {
                zone: self.zone,
                index: self.index,
            });
        }
        Ok(index)
    }
}

/// One side of a match
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    /// Only ever reduced by round losses
    pub health: i32,
    pub gold: u32,
    pub level: u32,
    /// Units that fight, index 0 attacks first
    pub battlefield: [Option<Unit>; BATTLEFIELD_SIZE],
    /// Reserve units, never in combat
    pub bench: [Option<Unit>; BENCH_SIZE],
    pub inventory: Vec<Item>,
    pub shop: Shop,
}

impl Competitor {
    pub fn new(health: i32, gold: u32) -> Self {
        Self {
            health,
            gold,
            level: STARTING_LEVEL,
            battlefield: Default::default(),
            bench: Default::default(),
            inventory: Vec::new(),
            shop: Shop::new(),
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.starting_health, config.starting_gold)
    }

    pub fn slots(&self, zone: Zone) -> &[Option<Unit>] {
        match zone {
            Zone::Battlefield => &self.battlefield,
            Zone::Bench => &self.bench,
        }
    }

    pub fn slots_mut(&mut self, zone: Zone) -> &mut [Option<Unit>] {
        match zone {
            Zone::Battlefield => &mut self.battlefield,
            Zone::Bench => &mut self.bench,
        }
    }

    /// The unit at `slot`, `None` if the slot is empty or out of range.
    pub fn unit_at(&self, slot: Slot) -> Option<&Unit> {
        self.slots(slot.zone)
            .get(slot.index as usize)
            .and_then(Option::as_ref)
    }

    pub fn unit_at_mut(&mut self, slot: Slot) -> Option<&mut Unit> {
        self.slots_mut(slot.zone)
            .get_mut(slot.index as usize)
            .and_then(Option::as_mut)
    }

    pub fn earn_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.gold >= cost
    }

    pub fn spend_gold(&mut self, amount: u32) -> GameResult<()> {
        if !self.can_afford(amount) {
            return Err(GameError::NotEnoughGold {
                have: self.gold,
                need: amount,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    pub fn lose_health(&mut self, amount: u32) {
        self.health = self.health.saturating_sub_unsigned(amount);
    }

    /// Pay `cost` and gain a level. Returns the resulting level, unchanged when
    /// the competitor cannot afford it or is already at `MAX_LEVEL`.
    pub fn level_up(&mut self, cost: u32) -> u32 {
        if self.level >= MAX_LEVEL || self.spend_gold(cost).is_err() {
            return self.level;
        }
        self.level += 1;
        self.level
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// True if at least one battlefield unit has health above zero.
    pub fn has_living_units(&self) -> bool {
        self.battlefield.iter().flatten().any(Unit::is_alive)
    }

    /// Find an empty bench slot
    pub fn find_empty_bench_slot(&self) -> Option<usize> {
        self.bench.iter().position(Option::is_none)
    }

    /// Find an empty battlefield slot
    pub fn find_empty_battlefield_slot(&self) -> Option<usize> {
        self.battlefield.iter().position(Option::is_none)
    }

    pub fn first_bench_unit(&self) -> Option<usize> {
        self.bench.iter().position(Option::is_some)
    }

    pub fn first_battlefield_unit(&self) -> Option<usize> {
        self.battlefield.iter().position(Option::is_some)
    }

    /// Count units on the battlefield
    pub fn battlefield_unit_count(&self) -> usize {
        self.battlefield.iter().filter(|slot| slot.is_some()).count()
    }

    /// Count units on the bench
    pub fn bench_unit_count(&self) -> usize {
        self.bench.iter().filter(|slot| slot.is_some()).count()
    }

    /// Restore every battlefield unit to its captured stats. Bench units are untouched.
    pub fn reset_battlefield_stats(&mut self) {
        for unit in self.battlefield.iter_mut().flatten() {
            unit.reset_stats();
        }
    }
}

impl Default for Competitor {
    fn default() -> Self {
        Self::new(STARTING_HEALTH, STARTING_GOLD)
    }
}
