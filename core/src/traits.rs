//! Trait aggregation.
//!
//! Counts battlefield units per trait, resolves which traits cross an
//! activation threshold and folds the resulting bonus into matching units.
//! The pass always recomputes from the current board, so running it twice
//! without a board change leaves stats exactly where the first run put them.

use alloc::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::state::Competitor;
use crate::types::{Trait, TraitBonus};

/// Battlefield units per trait. Dead units still count while they hold a slot.
pub fn trait_counts(competitor: &Competitor) -> BTreeMap<Trait, u8> {
    let mut counts = BTreeMap::new();
    for unit in competitor.battlefield.iter().flatten() {
        let count: &mut u8 = counts.entry(unit.unit_trait).or_default();
        *count = count.saturating_add(1);
    }
    counts
}

/// Traits whose count crosses a threshold, with the bonus of the highest crossed tier.
pub fn active_trait_bonuses(competitor: &Competitor, catalog: &Catalog) -> BTreeMap<Trait, TraitBonus> {
    trait_counts(competitor)
        .into_iter()
        .filter_map(|(unit_trait, count)| {
            let tier = catalog.trait_definition(unit_trait)?.active_tier(count)?;
            Some((unit_trait, tier.bonus))
        })
        .collect()
}

/// Active traits with their unit counts, for display.
pub fn active_traits(competitor: &Competitor, catalog: &Catalog) -> BTreeMap<Trait, u8> {
    trait_counts(competitor)
        .into_iter()
        .filter(|(unit_trait, count)| {
            catalog
                .trait_definition(*unit_trait)
                .and_then(|def| def.active_tier(*count))
                .is_some()
        })
        .collect()
}

/// Recompute and apply trait bonuses for `competitor`.
///
/// Bench units lose any bonus they carried from a previous placement.
pub fn apply_trait_bonuses(competitor: &mut Competitor, catalog: &Catalog) {
    let active = active_trait_bonuses(competitor, catalog);
    for unit in competitor.battlefield.iter_mut().flatten() {
        unit.set_bonus(active.get(&unit.unit_trait).copied());
    }
    for unit in competitor.bench.iter_mut().flatten() {
        unit.set_bonus(None);
    }
}
