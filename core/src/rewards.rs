//! Unit-loss rewards.
//!
//! Whichever competitor loses a unit in an exchange is compensated: flat
//! gold, plus a level-scaled chance at a random item.

use crate::catalog::Catalog;
use crate::rng::MatchRng;
use crate::state::Competitor;
use crate::types::{Item, ItemTier};

/// Gold granted for every lost unit
pub const UNIT_LOSS_GOLD: u32 = 2;
/// Exclusive upper bound of the three-star roll window at level 0
pub const THREE_STAR_WINDOW: u32 = 3;
/// Exclusive upper bound of the two-star roll window at level 0
pub const TWO_STAR_WINDOW: u32 = 6;
/// Exclusive upper bound of the one-star roll window at level 0
pub const ONE_STAR_WINDOW: u32 = 8;

/// Map a roll in [0, 100) to a drop tier. Every window grows with `level`.
pub fn item_tier_for_roll(roll: u32, level: u32) -> Option<ItemTier> {
    if roll < THREE_STAR_WINDOW + level {
        Some(ItemTier::ThreeStar)
    } else if roll < TWO_STAR_WINDOW + level {
        Some(ItemTier::TwoStar)
    } else if roll < ONE_STAR_WINDOW + level {
        Some(ItemTier::OneStar)
    } else {
        None
    }
}

/// Roll for an item drop at `level`, uniform within the rolled tier.
pub fn roll_item_drop<R: MatchRng>(level: u32, catalog: &Catalog, rng: &mut R) -> Option<Item> {
    let roll = rng.gen_range(100) as u32;
    let tier = item_tier_for_roll(roll, level)?;
    let pool = catalog.items_of_tier(tier);
    rng.pick(&pool).map(|item| (*item).clone())
}

/// Compensate `owner` for losing a unit. Returns the dropped item, if any,
/// after adding it to the inventory.
pub fn on_unit_loss<R: MatchRng>(
    owner: &mut Competitor,
    catalog: &Catalog,
    rng: &mut R,
) -> Option<Item> {
    owner.earn_gold(UNIT_LOSS_GOLD);
    let item = roll_item_drop(owner.level, catalog, rng)?;
    owner.inventory.push(item.clone());
    Some(item)
}
