//! Bench and battlefield moves.
//!
//! Every move validates both addresses before touching the board, so a
//! failed call leaves the competitor exactly as it was. Moves only ever swap
//! slot contents, which keeps the number of owned units constant.

use crate::error::{GameError, GameResult};
use crate::state::{Competitor, Slot, Zone};

/// Move the unit at `origin` to `destination`, swapping with whatever is there.
///
/// * battlefield -> bench: the battlefield origin must hold a unit.
/// * bench -> battlefield: the bench origin must hold a unit.
/// * same zone: at least one of the two slots must hold a unit.
///
/// `destination` is `None` when the caller did not pick a placement.
pub fn move_unit(
    competitor: &mut Competitor,
    origin: Slot,
    destination: Option<Slot>,
) -> GameResult<()> {
    let destination = destination.ok_or(GameError::MissingDestination)?;
    let from = origin.checked_index()?;
    let to = destination.checked_index()?;

    match (origin.zone, destination.zone) {
        (Zone::Battlefield, Zone::Bench) => {
            if competitor.battlefield[from].is_none() {
                return Err(GameError::EmptySlot);
            }
            core::mem::swap(&mut competitor.battlefield[from], &mut competitor.bench[to]);
        }
        (Zone::Bench, Zone::Battlefield) => {
            if competitor.bench[from].is_none() {
                return Err(GameError::EmptySlot);
            }
            core::mem::swap(&mut competitor.bench[from], &mut competitor.battlefield[to]);
        }
        (zone, _) => {
            let slots = competitor.slots_mut(zone);
            if slots[from].is_none() && slots[to].is_none() {
                return Err(GameError::EmptySlot);
            }
            slots.swap(from, to);
        }
    }
    Ok(())
}

/// Move the leftmost bench unit into the leftmost empty battlefield slot.
///
/// Returns the (bench, battlefield) indices used, `None` once the battlefield
/// is full or the bench is empty.
pub fn promote_first_bench_unit(competitor: &mut Competitor) -> Option<(usize, usize)> {
    let to = competitor.find_empty_battlefield_slot()?;
    let from = competitor.first_bench_unit()?;
    move_unit(
        competitor,
        Slot::bench(from as u32),
        Some(Slot::battlefield(to as u32)),
    )
    .ok()?;
    Some((from, to))
}
