use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Unique identifier for a unit instance, unique across both competitors of a match
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
pub struct UnitId(pub u32);

/// Catalog identifier for an item
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
pub struct ItemId(pub u32);

/// Synergy tag carried by every unit
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Trait {
    Pyro,
    Hydro,
    Electro,
    Cryo,
    Anemo,
    Geo,
}

/// Item power bucket
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ItemTier {
    OneStar,
    TwoStar,
    ThreeStar,
}

/// Combat stats for a unit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct UnitStats {
    pub attack: i32,
    pub health: i32,
}

/// Flat stat bonus granted by an active trait
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct TraitBonus {
    pub attack: i32,
    pub health: i32,
}

/// One activation threshold of a trait
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitTier {
    /// Battlefield units of the trait needed to reach this tier
    pub count: u8,
    pub bonus: TraitBonus,
}

/// Activation thresholds of a trait, ascending by `count`
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDefinition {
    pub unit_trait: Trait,
    pub tiers: Vec<TraitTier>,
}

impl TraitDefinition {
    /// Highest tier whose threshold `count` reaches, if any.
    pub fn active_tier(&self, count: u8) -> Option<&TraitTier> {
        self.tiers.iter().rev().find(|tier| count >= tier.count)
    }
}

/// An equippable item. Items are immutable values.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub tier: ItemTier,
    pub attack: i32,
    pub health: i32,
}

/// A unit offered by the shop
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTemplate {
    pub name: String,
    #[serde(rename = "trait")]
    pub unit_trait: Trait,
    /// Purchase price in gold, also the star rank of the bought unit
    pub cost: u32,
    pub stats: UnitStats,
}

/// A unit owned by a competitor.
///
/// `stats` are the live values mutated by combat and trait bonuses, `base`
/// holds the values captured at acquisition (plus equipped items) that the
/// post-round reset restores.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    #[serde(rename = "trait")]
    pub unit_trait: Trait,
    pub stars: u32,
    pub stats: UnitStats,
    pub base: UnitStats,
    /// Trait bonus currently folded into `stats`
    pub bonus: Option<TraitBonus>,
}

impl Unit {
    pub fn from_template(id: UnitId, template: &UnitTemplate) -> Self {
        Self {
            id,
            name: template.name.clone(),
            unit_trait: template.unit_trait,
            stars: template.cost,
            stats: template.stats,
            base: template.stats,
            bonus: None,
        }
    }

    pub fn new(id: UnitId, name: &str, unit_trait: Trait, stars: u32, attack: i32, health: i32) -> Self {
        let stats = UnitStats { attack, health };
        Self {
            id,
            name: String::from(name),
            unit_trait,
            stars,
            stats,
            base: stats,
            bonus: None,
        }
    }

    pub fn attack(&self) -> i32 {
        self.stats.attack
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn is_alive(&self) -> bool {
        self.stats.health > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.stats.health -= amount;
    }

    /// Replace the folded-in trait bonus. Setting the same bonus twice is a no-op.
    pub fn set_bonus(&mut self, bonus: Option<TraitBonus>) {
        if self.bonus == bonus {
            return;
        }
        if let Some(old) = self.bonus.take() {
            self.stats.attack -= old.attack;
            self.stats.health -= old.health;
        }
        if let Some(new) = bonus {
            self.stats.attack += new.attack;
            self.stats.health += new.health;
        }
        self.bonus = bonus;
    }

    /// Restore live stats to the captured base values and drop any trait bonus.
    pub fn reset_stats(&mut self) {
        self.stats = self.base;
        self.bonus = None;
    }

    /// Permanently fold an item's stats into the unit.
    pub fn equip(&mut self, item: &Item) {
        self.base.attack += item.attack;
        self.base.health += item.health;
        self.stats.attack += item.attack;
        self.stats.health += item.health;
    }
}
