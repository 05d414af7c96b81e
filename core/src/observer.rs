//! Match observers.
//!
//! The engine publishes a `MatchEvent` after every exchange and every
//! mutating step. Delivery is synchronous and nothing is read back, so an
//! observer can never influence resolution.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::battle::{Exchange, RoundOutcome, Team};
use crate::types::Item;

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum MatchEvent {
    /// One attack resolved during a round
    Exchange(Exchange),
    /// A competitor received an item as a combat reward
    ItemDropped { team: Team, item: Item },
    /// A round reached a terminal state and was settled
    RoundEnd { round: u32, outcome: RoundOutcome },
    /// Battlefield stats were restored to their captured values
    StatsReset,
    /// A competitor's board, gold, shop or inventory changed outside combat
    BoardChanged { team: Team },
    /// Trait bonuses were recomputed for a competitor
    TraitsApplied { team: Team },
    /// A competitor's shop was regenerated
    ShopRefreshed { team: Team },
}

/// Receives match events
pub trait MatchObserver {
    fn notify(&mut self, event: &MatchEvent);
}

impl<F: FnMut(&MatchEvent)> MatchObserver for F {
    fn notify(&mut self, event: &MatchEvent) {
        self(event)
    }
}

/// Observer that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
    fn notify(&mut self, _event: &MatchEvent) {}
}
