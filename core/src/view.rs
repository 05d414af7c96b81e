//! View types for UI serialization
//!
//! Flat snapshots of a match that a frontend or log sink can render without
//! reaching into engine internals.

use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::battle::Team;
use crate::engine::GameEngine;
use crate::state::Competitor;
use crate::types::*;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// View of a unit on the battlefield or bench
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct UnitView {
    pub id: UnitId,
    pub name: String,
    pub unit_trait: Trait,
    pub stars: u32,
    pub attack: i32,
    pub health: i32,
    pub base_attack: i32,
    pub base_health: i32,
    /// Whether a trait bonus is currently folded into the stats
    pub boosted: bool,
}

impl From<&Unit> for UnitView {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id,
            name: unit.name.clone(),
            unit_trait: unit.unit_trait,
            stars: unit.stars,
            attack: unit.stats.attack,
            health: unit.stats.health,
            base_attack: unit.base.attack,
            base_health: unit.base.health,
            boosted: unit.bonus.is_some(),
        }
    }
}

/// View of a shop offer
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct OfferView {
    pub name: String,
    pub unit_trait: Trait,
    pub cost: u32,
    pub attack: i32,
    pub health: i32,
    pub affordable: bool,
}

/// One competitor as the UI sees it
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct CompetitorView {
    pub health: i32,
    pub gold: u32,
    pub level: u32,
    /// Shop slots (None = sold or no template for the rolled cost)
    pub shop: Vec<Option<OfferView>>,
    pub battlefield: Vec<Option<UnitView>>,
    pub bench: Vec<Option<UnitView>>,
    pub inventory: Vec<Item>,
    /// Active traits and how many battlefield units carry them
    pub active_traits: Vec<(Trait, u8)>,
}

impl CompetitorView {
    pub fn from_competitor(competitor: &Competitor, active_traits: Vec<(Trait, u8)>) -> Self {
        let units = |slots: &[Option<Unit>]| -> Vec<Option<UnitView>> {
            slots
                .iter()
                .map(|slot| slot.as_ref().map(UnitView::from))
                .collect()
        };

        Self {
            health: competitor.health,
            gold: competitor.gold,
            level: competitor.level,
            shop: competitor
                .shop
                .offers()
                .iter()
                .map(|offer| {
                    offer.as_ref().map(|template| OfferView {
                        name: template.name.clone(),
                        unit_trait: template.unit_trait,
                        cost: template.cost,
                        attack: template.stats.attack,
                        health: template.stats.health,
                        affordable: competitor.can_afford(template.cost),
                    })
                })
                .collect(),
            battlefield: units(&competitor.battlefield),
            bench: units(&competitor.bench),
            inventory: competitor.inventory.clone(),
            active_traits,
        }
    }
}

/// The complete match view
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct MatchView {
    /// Rounds resolved so far
    pub round: u32,
    pub player: CompetitorView,
    pub opponent: CompetitorView,
    pub game_over: bool,
    pub winner: Option<Team>,
}

impl MatchView {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let side = |team: Team| {
            CompetitorView::from_competitor(
                engine.competitor(team),
                engine.active_traits(team).into_iter().collect(),
            )
        };

        Self {
            round: engine.round(),
            player: side(Team::Player),
            opponent: side(Team::Opponent),
            game_over: engine.is_game_over(),
            winner: engine.winner(),
        }
    }
}
