//! Error types for match operations
//!
//! Enum based and no_std compatible. Every fallible operation validates its
//! input before mutating anything, so an `Err` always means "nothing changed".

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::state::Zone;

/// Errors that can occur while acting on a competitor's board
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum GameError {
    /// Slot index outside the zone's capacity
    InvalidIndex { zone: Zone, index: u32 },
    /// Shop index outside the current offers
    InvalidShopSlot { index: u32 },
    /// A move was requested without a destination
    MissingDestination,
    /// Attempted to interact with an empty slot
    EmptySlot,
    /// Not enough gold to perform the action
    NotEnoughGold { have: u32, need: u32 },
    /// No free bench slot to receive a purchase
    BenchFull,
    /// Inventory index does not hold an item
    ItemNotFound { index: u32 },
}

/// Result type alias for match operations
pub type GameResult<T> = Result<T, GameError>;
