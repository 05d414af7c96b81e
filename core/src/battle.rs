//! Round resolution.
//!
//! A round alternates single exchanges between the two sides until one or
//! both battlefields have no living unit. Dead units stay in their slots;
//! "alive" is always derived from health, and the post-round reset brings
//! them back.

use alloc::format;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::limits::{LimitReason, RoundLimits};
use crate::log;
use crate::observer::{MatchEvent, MatchObserver};
use crate::rewards::on_unit_loss;
use crate::rng::MatchRng;
use crate::state::Competitor;
use crate::types::Item;

/// Gold per round number paid to the round winner
pub const WINNER_GOLD_PER_ROUND: u32 = 2;
/// Gold per round number paid to the round loser
pub const LOSER_GOLD_PER_ROUND: u32 = 1;
/// Health per round number taken from the round loser
pub const HEALTH_LOSS_PER_ROUND: u32 = 1;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Team {
    Player,
    Opponent,
}

impl Team {
    pub fn other(self) -> Self {
        match self {
            Team::Player => Team::Opponent,
            Team::Opponent => Team::Player,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::Player => "PLAYER",
            Team::Opponent => "OPPONENT",
        }
    }
}

/// Terminal state of a round
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(tag = "type", content = "team", rename_all = "camelCase")]
pub enum RoundOutcome {
    Victory(Team),
    Draw,
}

impl RoundOutcome {
    pub fn winner(self) -> Option<Team> {
        match self {
            RoundOutcome::Victory(team) => Some(team),
            RoundOutcome::Draw => None,
        }
    }
}

/// Which units an exchange killed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Casualties {
    None,
    Attacker,
    Defender,
    Both,
}

impl Casualties {
    fn classify(attacker_alive: bool, defender_alive: bool) -> Self {
        match (attacker_alive, defender_alive) {
            (true, true) => Casualties::None,
            (false, true) => Casualties::Attacker,
            (true, false) => Casualties::Defender,
            (false, false) => Casualties::Both,
        }
    }

    /// Teams that lost a unit, given the attacking team.
    ///
    /// Each of them is owed the unit-loss reward.
    pub fn losing_teams(self, attacker: Team) -> Vec<Team> {
        match self {
            Casualties::None => Vec::new(),
            Casualties::Attacker => alloc::vec![attacker],
            Casualties::Defender => alloc::vec![attacker.other()],
            Casualties::Both => alloc::vec![attacker, attacker.other()],
        }
    }
}

/// One attack: the attacker and defender trade damage simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub attacker_team: Team,
    pub attacker_slot: u32,
    pub defender_slot: u32,
    /// Attacker health after the exchange
    pub attacker_health: i32,
    /// Defender health after the exchange
    pub defender_health: i32,
    pub casualties: Casualties,
}

/// Everything that happened in one resolved round
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub round: u32,
    pub first_attacker: Team,
    pub exchanges: Vec<Exchange>,
    pub drops: Vec<(Team, Item)>,
    pub outcome: RoundOutcome,
    pub limit_exceeded: Option<LimitReason>,
}

/// Mutable access to both sides of a round
pub struct Combatants<'a> {
    pub player: &'a mut Competitor,
    pub opponent: &'a mut Competitor,
}

impl<'a> Combatants<'a> {
    pub fn new(player: &'a mut Competitor, opponent: &'a mut Competitor) -> Self {
        Self { player, opponent }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut Competitor {
        match team {
            Team::Player => &mut *self.player,
            Team::Opponent => &mut *self.opponent,
        }
    }

    /// (acting side, other side)
    fn split_mut(&mut self, acting: Team) -> (&mut Competitor, &mut Competitor) {
        match acting {
            Team::Player => (&mut *self.player, &mut *self.opponent),
            Team::Opponent => (&mut *self.opponent, &mut *self.player),
        }
    }

    /// Terminal check: `None` while both sides still have a living battlefield unit.
    pub fn status(&self) -> Option<RoundOutcome> {
        round_status(&*self.player, &*self.opponent)
    }
}

/// Round-status check over both battlefields.
pub fn round_status(player: &Competitor, opponent: &Competitor) -> Option<RoundOutcome> {
    match (player.has_living_units(), opponent.has_living_units()) {
        (true, true) => None,
        (true, false) => Some(RoundOutcome::Victory(Team::Player)),
        (false, true) => Some(RoundOutcome::Victory(Team::Opponent)),
        (false, false) => Some(RoundOutcome::Draw),
    }
}

/// First living battlefield unit, scanning from slot 0.
pub fn select_attacker(competitor: &Competitor) -> Option<usize> {
    competitor
        .battlefield
        .iter()
        .position(|slot| slot.as_ref().is_some_and(|unit| unit.is_alive()))
}

/// Uniformly random living battlefield unit.
///
/// Drawing among the living slots directly gives the same distribution as
/// sampling all seven slots and rejecting empty or dead ones.
pub fn select_defender<R: MatchRng>(competitor: &Competitor, rng: &mut R) -> Option<usize> {
    let living: Vec<usize> = competitor
        .battlefield
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.as_ref().is_some_and(|unit| unit.is_alive()))
        .map(|(index, _)| index)
        .collect();
    rng.pick(&living).copied()
}

/// Resolve one exchange for `acting`. `None` if either side has nobody to fight.
pub fn execute_exchange<R: MatchRng>(
    combatants: &mut Combatants,
    acting: Team,
    rng: &mut R,
) -> Option<Exchange> {
    let (attacking, defending) = combatants.split_mut(acting);
    let attacker_slot = select_attacker(attacking)?;
    let defender_slot = select_defender(defending, rng)?;

    let attacker = attacking.battlefield[attacker_slot].as_mut()?;
    let defender = defending.battlefield[defender_slot].as_mut()?;

    // Both hits use pre-damage attack values
    let attacker_attack = attacker.attack();
    let defender_attack = defender.attack();
    defender.take_damage(attacker_attack);
    attacker.take_damage(defender_attack);

    Some(Exchange {
        attacker_team: acting,
        attacker_slot: attacker_slot as u32,
        defender_slot: defender_slot as u32,
        attacker_health: attacker.health(),
        defender_health: defender.health(),
        casualties: Casualties::classify(attacker.is_alive(), defender.is_alive()),
    })
}

/// Pay out gold and health for a finished round. A draw settles nothing.
pub fn settle_round(combatants: &mut Combatants, outcome: RoundOutcome, round: u32) {
    let Some(winner) = outcome.winner() else {
        return;
    };
    combatants
        .get_mut(winner)
        .earn_gold(WINNER_GOLD_PER_ROUND.saturating_mul(round));
    let loser = combatants.get_mut(winner.other());
    loser.earn_gold(LOSER_GOLD_PER_ROUND.saturating_mul(round));
    loser.lose_health(HEALTH_LOSS_PER_ROUND.saturating_mul(round));
}

// ==========================================
// MAIN ROUND RESOLVER
// ==========================================

/// Resolve a full round between `player` and `opponent`.
///
/// Increments `round`, alternates exchanges from a random starting side until
/// a terminal state, pays unit-loss rewards after every exchange, settles the
/// round, and finally restores every battlefield unit's stats.
///
/// A side that starts with no living unit simply loses before any exchange.
pub fn resolve_round<R: MatchRng>(
    player: &mut Competitor,
    opponent: &mut Competitor,
    round: &mut u32,
    catalog: &Catalog,
    max_exchanges: u32,
    rng: &mut R,
    observer: &mut dyn MatchObserver,
) -> RoundReport {
    *round += 1;
    let round_number = *round;
    let mut combatants = Combatants::new(player, opponent);
    let mut limits = RoundLimits::new(max_exchanges);

    let first_attacker = if rng.gen_range(2) == 0 {
        Team::Player
    } else {
        Team::Opponent
    };
    log::debug(
        "resolve_round",
        &format!("round={} first={}", round_number, first_attacker.as_str()),
    );

    let mut acting = first_attacker;
    let mut exchanges = Vec::new();
    let mut drops = Vec::new();
    let mut limit_exceeded = None;

    let outcome = loop {
        if let Some(outcome) = combatants.status() {
            break outcome;
        }
        if let Err(reason) = limits.record_exchange() {
            log::warn(&format!("round {} hit {:?}, calling a draw", round_number, reason));
            limit_exceeded = Some(reason);
            break RoundOutcome::Draw;
        }
        // Unreachable while status() reports both sides alive
        let Some(exchange) = execute_exchange(&mut combatants, acting, rng) else {
            break RoundOutcome::Draw;
        };

        for team in exchange.casualties.losing_teams(acting) {
            if let Some(item) = on_unit_loss(combatants.get_mut(team), catalog, rng) {
                observer.notify(&MatchEvent::ItemDropped {
                    team,
                    item: item.clone(),
                });
                drops.push((team, item));
            }
        }

        observer.notify(&MatchEvent::Exchange(exchange.clone()));
        exchanges.push(exchange);
        acting = acting.other();
    };

    settle_round(&mut combatants, outcome, round_number);
    combatants.player.reset_battlefield_stats();
    combatants.opponent.reset_battlefield_stats();

    log::info(&format!(
        "Round {} result: {:?} after {} exchanges",
        round_number,
        outcome,
        exchanges.len()
    ));
    observer.notify(&MatchEvent::RoundEnd {
        round: round_number,
        outcome,
    });

    RoundReport {
        round: round_number,
        first_attacker,
        exchanges,
        drops,
        outcome,
        limit_exceeded,
    }
}
