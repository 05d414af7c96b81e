//! Greedy shop-phase driver for the computer-controlled competitor.
//!
//! Every shopping pass spends at least the reroll gold, every placement fills
//! a battlefield slot from a finite bench, and item use has a fixed number of
//! attempts, so a turn always halts.

use alloc::format;

use crate::catalog::Catalog;
use crate::economy::{buy, level_up, reroll_shop, use_item};
use crate::log;
use crate::positions::promote_first_bench_unit;
use crate::rng::MatchRng;
use crate::state::{Competitor, Slot};

/// Shop slots the driver tries to buy on every pass
pub const GREEDY_BUY_SLOTS: usize = 3;
/// How many times the driver tries to equip an item
pub const ITEM_USE_ATTEMPTS: usize = 6;

/// What a heuristic turn did, mostly for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeuristicTurn {
    pub shopping_passes: u32,
    pub units_bought: u32,
    pub units_placed: u32,
    pub items_used: u32,
}

/// Play one shop phase for `competitor`.
pub fn run_heuristic_turn<R: MatchRng>(
    competitor: &mut Competitor,
    catalog: &Catalog,
    rng: &mut R,
    next_unit_id: &mut u32,
) -> HeuristicTurn {
    let mut turn = HeuristicTurn::default();

    // Reroll always costs one gold while any is left, so this drains gold
    while competitor.gold >= 1 {
        turn.shopping_passes += 1;
        level_up(competitor);
        for shop_index in 0..GREEDY_BUY_SLOTS {
            if buy(competitor, shop_index, next_unit_id).is_ok() {
                turn.units_bought += 1;
            }
        }
        reroll_shop(competitor, catalog, rng);
    }

    while promote_first_bench_unit(competitor).is_some() {
        turn.units_placed += 1;
    }

    for _ in 0..ITEM_USE_ATTEMPTS {
        let Some(target) = competitor.first_battlefield_unit() else {
            break;
        };
        if use_item(competitor, 0, Slot::battlefield(target as u32)).is_ok() {
            turn.items_used += 1;
        }
    }

    log::debug("run_heuristic_turn", &format!("{:?}", turn));
    turn
}
