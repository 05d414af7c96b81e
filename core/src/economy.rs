//! Shop-phase economy: buying, selling, levelling, rerolling and items.

use crate::catalog::Catalog;
use crate::error::{GameError, GameResult};
use crate::rng::MatchRng;
use crate::state::{Competitor, Slot};
use crate::types::{Unit, UnitId, UnitTemplate};

/// Gold per current level charged for a level up
pub const LEVEL_UP_COST_PER_LEVEL: u32 = 5;
/// Gold charged for a paid reroll
pub const REROLL_COST: u32 = 1;

pub fn level_up_cost(level: u32) -> u32 {
    level.saturating_mul(LEVEL_UP_COST_PER_LEVEL)
}

/// Level up if affordable. Returns the resulting level, unchanged on failure.
pub fn level_up(competitor: &mut Competitor) -> u32 {
    let cost = level_up_cost(competitor.level);
    competitor.level_up(cost)
}

/// Pay one gold and regenerate the shop. With no gold the current offers are
/// returned untouched.
pub fn reroll_shop<'a, R: MatchRng>(
    competitor: &'a mut Competitor,
    catalog: &Catalog,
    rng: &mut R,
) -> &'a [Option<UnitTemplate>] {
    if competitor.spend_gold(REROLL_COST).is_err() {
        return competitor.shop.offers();
    }
    let level = competitor.level;
    competitor.shop.reroll(level, &catalog.units, rng)
}

/// Buy the offer at `shop_index` into the leftmost free bench slot.
///
/// `next_unit_id` is the match-wide id counter; it only advances on success.
pub fn buy(competitor: &mut Competitor, shop_index: usize, next_unit_id: &mut u32) -> GameResult<UnitId> {
    let cost = competitor.shop.peek(shop_index)?.cost;
    if !competitor.can_afford(cost) {
        return Err(GameError::NotEnoughGold {
            have: competitor.gold,
            need: cost,
        });
    }
    let bench_slot = competitor
        .find_empty_bench_slot()
        .ok_or(GameError::BenchFull)?;

    let template = competitor.shop.take(shop_index)?;
    competitor.spend_gold(cost)?;
    *next_unit_id += 1;
    let id = UnitId(*next_unit_id);
    competitor.bench[bench_slot] = Some(Unit::from_template(id, &template));
    Ok(id)
}

/// Sell the unit at `slot` for its star rank in gold. Returns the gold credited.
pub fn sell(competitor: &mut Competitor, slot: Slot) -> GameResult<u32> {
    let index = slot.checked_index()?;
    let unit = competitor.slots_mut(slot.zone)[index]
        .take()
        .ok_or(GameError::EmptySlot)?;
    competitor.earn_gold(unit.stars);
    Ok(unit.stars)
}

/// Equip the inventory item at `item_index` onto the unit at `slot`.
///
/// The item is consumed and its stats become part of the unit's captured
/// base, so they survive the post-round reset.
pub fn use_item(competitor: &mut Competitor, item_index: usize, slot: Slot) -> GameResult<()> {
    if item_index >= competitor.inventory.len() {
        return Err(GameError::ItemNotFound {
            index: item_index as u32,
        });
    }
    slot.checked_index()?;
    if competitor.unit_at(slot).is_none() {
        return Err(GameError::EmptySlot);
    }

    let item = competitor.inventory.remove(item_index);
    if let Some(unit) = competitor.unit_at_mut(slot) {
        unit.equip(&item);
    }
    Ok(())
}
