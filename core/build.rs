//! Build script: reads /catalog/units.json, /catalog/items.json and
//! /catalog/traits.json and generates Rust source that statically constructs
//! the built-in catalog. The core crate embeds this data without any runtime
//! JSON parsing, keeping it no_std compatible.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

// ── JSON schema types (build-time only) ──────────────────────────────────────

#[derive(Deserialize)]
struct JsonUnit {
    name: String,
    #[serde(rename = "trait")]
    unit_trait: String,
    cost: u32,
    stats: JsonStats,
}

#[derive(Deserialize)]
struct JsonStats {
    attack: i32,
    health: i32,
}

#[derive(Deserialize)]
struct JsonItem {
    id: u32,
    name: String,
    tier: String,
    attack: i32,
    health: i32,
}

#[derive(Deserialize)]
struct JsonTraitTier {
    count: u8,
    attack: i32,
    health: i32,
}

#[derive(Deserialize)]
struct JsonTrait {
    #[serde(rename = "trait")]
    unit_trait: String,
    tiers: Vec<JsonTraitTier>,
}

const KNOWN_TRAITS: &[&str] = &["Pyro", "Hydro", "Electro", "Cryo", "Anemo", "Geo"];
const KNOWN_TIERS: &[&str] = &["OneStar", "TwoStar", "ThreeStar"];

// ── Code generation helpers ──────────────────────────────────────────────────

fn gen_trait(name: &str) -> String {
    // Trait names in JSON match Rust variant names exactly
    if !KNOWN_TRAITS.contains(&name) {
        panic!("Unknown trait: {name}");
    }
    format!("Trait::{name}")
}

fn gen_tier(name: &str) -> String {
    if !KNOWN_TIERS.contains(&name) {
        panic!("Unknown item tier: {name}");
    }
    format!("ItemTier::{name}")
}

fn gen_unit(unit: &JsonUnit) -> String {
    if !(1..=5).contains(&unit.cost) {
        panic!("Unit '{}' has cost {} outside 1..=5", unit.name, unit.cost);
    }
    format!(
        r#"        UnitTemplate {{
            name: String::from("{name}"),
            unit_trait: {unit_trait},
            cost: {cost},
            stats: UnitStats {{ attack: {atk}, health: {hp} }},
        }}"#,
        name = unit.name,
        unit_trait = gen_trait(&unit.unit_trait),
        cost = unit.cost,
        atk = unit.stats.attack,
        hp = unit.stats.health,
    )
}

fn gen_item(item: &JsonItem) -> String {
    format!(
        r#"        Item {{
            id: ItemId({id}),
            name: String::from("{name}"),
            tier: {tier},
            attack: {atk},
            health: {hp},
        }}"#,
        id = item.id,
        name = item.name,
        tier = gen_tier(&item.tier),
        atk = item.attack,
        hp = item.health,
    )
}

fn gen_trait_definition(def: &JsonTrait) -> String {
    let mut last = 0;
    let tiers: Vec<String> = def
        .tiers
        .iter()
        .map(|t| {
            if t.count <= last {
                panic!("Trait {} thresholds must be strictly ascending", def.unit_trait);
            }
            last = t.count;
            format!(
                "TraitTier {{ count: {}, bonus: TraitBonus {{ attack: {}, health: {} }} }}",
                t.count, t.attack, t.health
            )
        })
        .collect();
    format!(
        "        TraitDefinition {{\n            unit_trait: {},\n            tiers: vec![{}],\n        }}",
        gen_trait(&def.unit_trait),
        tiers.join(", ")
    )
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let catalog_dir = Path::new(&manifest_dir).join("../catalog");

    let units: Vec<JsonUnit> = read_json(&catalog_dir.join("units.json"));
    let items: Vec<JsonItem> = read_json(&catalog_dir.join("items.json"));
    let traits: Vec<JsonTrait> = read_json(&catalog_dir.join("traits.json"));

    for tier in KNOWN_TIERS {
        let count = items.iter().filter(|i| i.tier == *tier).count();
        if count != 5 {
            panic!("Item tier {tier} must have exactly 5 items, found {count}");
        }
    }

    let unit_entries: Vec<String> = units.iter().map(gen_unit).collect();
    let item_entries: Vec<String> = items.iter().map(gen_item).collect();
    let trait_entries: Vec<String> = traits.iter().map(gen_trait_definition).collect();

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("catalog_generated.rs");

    let generated = format!(
        r#"// Auto-generated from catalog/*.json. DO NOT EDIT
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use crate::types::*;

/// Returns every unit template defined in units.json.
pub fn builtin_units() -> Vec<UnitTemplate> {{
    vec![
{}
    ]
}}

/// Returns every item defined in items.json.
pub fn builtin_items() -> Vec<Item> {{
    vec![
{}
    ]
}}

/// Returns every trait definition in traits.json.
pub fn builtin_traits() -> Vec<TraitDefinition> {{
    vec![
{}
    ]
}}
"#,
        unit_entries.join(",\n"),
        item_entries.join(",\n"),
        trait_entries.join(",\n"),
    );

    fs::write(&dest, generated).expect("Failed to write generated catalog file");
}
