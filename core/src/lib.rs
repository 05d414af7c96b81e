#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod battle;
pub mod catalog;
pub mod economy;
pub mod engine;
pub mod error;
pub mod limits;
mod log;
pub mod observer;
pub mod opponents;
pub mod positions;
pub mod rewards;
pub mod rng;
pub mod shop;
pub mod state;
pub mod traits;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use battle::{resolve_round, Casualties, Exchange, RoundOutcome, RoundReport, Team};
pub use catalog::Catalog;
pub use engine::GameEngine;
pub use error::{GameError, GameResult};
pub use limits::{LimitReason, RoundLimits};
pub use observer::{MatchEvent, MatchObserver, NoopObserver};
pub use opponents::HeuristicTurn;
pub use rng::{MatchRng, XorShiftRng};
pub use state::*;
pub use types::*;
pub use view::*;
