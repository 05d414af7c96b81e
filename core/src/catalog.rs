//! Statically compiled catalog from /catalog/*.json.
//! Generated at build time by build.rs, no runtime JSON parsing needed.

use alloc::vec::Vec;

use crate::types::{Item, ItemTier, Trait, TraitDefinition, UnitTemplate};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/catalog_generated.rs"));
}

pub use generated::{builtin_items, builtin_traits, builtin_units};

/// Everything the shop, reward and trait passes draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub units: Vec<UnitTemplate>,
    pub items: Vec<Item>,
    pub traits: Vec<TraitDefinition>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            units: builtin_units(),
            items: builtin_items(),
            traits: builtin_traits(),
        }
    }

    pub fn items_of_tier(&self, tier: ItemTier) -> Vec<&Item> {
        self.items.iter().filter(|item| item.tier == tier).collect()
    }

    pub fn trait_definition(&self, unit_trait: Trait) -> Option<&TraitDefinition> {
        self.traits.iter().find(|def| def.unit_trait == unit_trait)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
