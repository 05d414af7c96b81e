//! Per-competitor shop.
//!
//! The number of offers grows with level, and each offer first rolls a cost
//! tier from a level-weighted odds table, then picks uniformly among the
//! catalog templates of that cost.

use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::rng::MatchRng;
use crate::state::MAX_LEVEL;
use crate::types::UnitTemplate;

/// Most offers a shop can show
pub const MAX_SHOP_SIZE: usize = 5;

/// Highest unit cost tier
pub const MAX_UNIT_COST: u32 = 5;

/// Percent odds of rolling cost 1..=5, indexed by level - 1
const ROLL_ODDS: [[u32; MAX_UNIT_COST as usize]; MAX_LEVEL as usize] = [
    [100, 0, 0, 0, 0],
    [100, 0, 0, 0, 0],
    [75, 25, 0, 0, 0],
    [55, 30, 15, 0, 0],
    [45, 33, 20, 2, 0],
    [30, 40, 25, 5, 0],
    [19, 30, 35, 15, 1],
    [18, 25, 32, 22, 3],
    [10, 20, 25, 35, 10],
];

/// Number of offers shown at `level`
pub fn shop_size(level: u32) -> usize {
    (2 + level as usize).min(MAX_SHOP_SIZE)
}

fn odds_for_level(level: u32) -> &'static [u32; MAX_UNIT_COST as usize] {
    let row = (level.clamp(1, MAX_LEVEL) - 1) as usize;
    &ROLL_ODDS[row]
}

/// Roll a cost tier for `level`, weighted by the odds table
pub fn roll_cost<R: MatchRng>(level: u32, rng: &mut R) -> u32 {
    let odds = odds_for_level(level);
    let total: u32 = odds.iter().sum();
    let mut target = rng.gen_range(total as usize) as u32;
    for (tier, weight) in odds.iter().enumerate() {
        if *weight == 0 {
            continue;
        }
        if target < *weight {
            return tier as u32 + 1;
        }
        target -= weight;
    }
    1
}

/// Units currently offered to a competitor. A bought slot stays `None` until the next reroll.
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub offers: Vec<Option<UnitTemplate>>,
}

impl Shop {
    pub fn new() -> Self {
        Self { offers: Vec::new() }
    }

    pub fn offers(&self) -> &[Option<UnitTemplate>] {
        &self.offers
    }

    /// Replace every offer with a fresh roll for `level`.
    ///
    /// A rolled cost tier with no templates in `pool` leaves that slot empty.
    pub fn reroll<R: MatchRng>(
        &mut self,
        level: u32,
        pool: &[UnitTemplate],
        rng: &mut R,
    ) -> &[Option<UnitTemplate>] {
        let size = shop_size(level);
        let mut offers = Vec::with_capacity(size);
        for _ in 0..size {
            let cost = roll_cost(level, rng);
            let candidates: Vec<&UnitTemplate> = pool.iter().filter(|t| t.cost == cost).collect();
            offers.push(rng.pick(&candidates).map(|t| (*t).clone()));
        }
        self.offers = offers;
        &self.offers
    }

    /// Borrow the offer at `index` without taking it.
    pub fn peek(&self, index: usize) -> GameResult<&UnitTemplate> {
        self.offers
            .get(index)
            .ok_or(GameError::InvalidShopSlot {
                index: index as u32,
            })?
            .as_ref()
            .ok_or(GameError::EmptySlot)
    }

    /// Remove and return the offer at `index`.
    pub fn take(&mut self, index: usize) -> GameResult<UnitTemplate> {
        self.peek(index)?;
        self.offers[index].take().ok_or(GameError::EmptySlot)
    }
}
