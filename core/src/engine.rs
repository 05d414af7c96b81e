//! Match engine
//!
//! Owns both competitors, the shared round counter, the RNG and the
//! observer. A caller drives the phases in order: shop phase, trait bonuses,
//! attack phase, stat reset, and calls the action methods in between.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::format;

use crate::battle::{resolve_round, RoundReport, Team};
use crate::catalog::Catalog;
use crate::economy;
use crate::error::GameResult;
use crate::log;
use crate::observer::{MatchEvent, MatchObserver, NoopObserver};
use crate::opponents::{run_heuristic_turn, HeuristicTurn};
use crate::positions;
use crate::rng::XorShiftRng;
use crate::state::{Competitor, MatchConfig, Slot};
use crate::traits;
use crate::types::{Item, Trait, Unit, UnitId, UnitTemplate};

/// Pick one side out of the two competitor fields.
fn side_mut<'a>(
    player: &'a mut Competitor,
    opponent: &'a mut Competitor,
    team: Team,
) -> &'a mut Competitor {
    match team {
        Team::Player => player,
        Team::Opponent => opponent,
    }
}

/// The match engine. `Team::Opponent` is the computer-controlled side.
pub struct GameEngine {
    config: MatchConfig,
    catalog: Catalog,
    player: Competitor,
    opponent: Competitor,
    round: u32,
    next_unit_id: u32,
    rng: XorShiftRng,
    observer: Box<dyn MatchObserver>,
    last_report: Option<RoundReport>,
}

impl GameEngine {
    /// Create a new match with the built-in catalog
    pub fn new(config: MatchConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }

    pub fn with_catalog(config: MatchConfig, catalog: Catalog) -> Self {
        log::info("=== ARENA ENGINE INITIALIZED ===");
        Self {
            player: Competitor::from_config(&config),
            opponent: Competitor::from_config(&config),
            rng: XorShiftRng::seed_from_u64(config.seed),
            config,
            catalog,
            round: 0,
            next_unit_id: 0,
            observer: Box::new(NoopObserver),
            last_report: None,
        }
    }

    /// Replace the observer that receives every match event
    pub fn set_observer<O: MatchObserver + 'static>(&mut self, observer: O) {
        self.observer = Box::new(observer);
    }

    // ==========================================
    // QUERIES
    // ==========================================

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rounds resolved so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn competitor(&self, team: Team) -> &Competitor {
        match team {
            Team::Player => &self.player,
            Team::Opponent => &self.opponent,
        }
    }

    /// Direct mutable access for hosts that restore or script a board.
    pub fn competitor_mut(&mut self, team: Team) -> &mut Competitor {
        side_mut(&mut self.player, &mut self.opponent, team)
    }

    pub fn shop(&self, team: Team) -> &[Option<UnitTemplate>] {
        self.competitor(team).shop.offers()
    }

    pub fn inventory(&self, team: Team) -> &[Item] {
        &self.competitor(team).inventory
    }

    pub fn battlefield(&self, team: Team) -> &[Option<Unit>] {
        &self.competitor(team).battlefield
    }

    pub fn bench(&self, team: Team) -> &[Option<Unit>] {
        &self.competitor(team).bench
    }

    pub fn health(&self, team: Team) -> i32 {
        self.competitor(team).health
    }

    pub fn gold(&self, team: Team) -> u32 {
        self.competitor(team).gold
    }

    pub fn level(&self, team: Team) -> u32 {
        self.competitor(team).level
    }

    pub fn last_report(&self) -> Option<&RoundReport> {
        self.last_report.as_ref()
    }

    /// Active traits on `team`'s battlefield with their unit counts
    pub fn active_traits(&self, team: Team) -> BTreeMap<Trait, u8> {
        traits::active_traits(self.competitor(team), &self.catalog)
    }

    /// True once either competitor's health has dropped to zero
    pub fn is_game_over(&self) -> bool {
        self.player.is_defeated() || self.opponent.is_defeated()
    }

    /// The surviving competitor once the game is over, `None` while it runs
    /// or if both fell in the same round.
    pub fn winner(&self) -> Option<Team> {
        match (self.player.is_defeated(), self.opponent.is_defeated()) {
            (false, true) => Some(Team::Player),
            (true, false) => Some(Team::Opponent),
            _ => None,
        }
    }

    // ==========================================
    // ACTIONS
    // ==========================================

    /// Buy the shop offer at `shop_index` onto the bench
    pub fn buy(&mut self, team: Team, shop_index: usize) -> GameResult<UnitId> {
        log::action("buy", &format!("team={} shop_index={}", team.as_str(), shop_index));
        let competitor = side_mut(&mut self.player, &mut self.opponent, team);
        let result = economy::buy(competitor, shop_index, &mut self.next_unit_id);
        self.finish_action(team, result)
    }

    /// Sell the unit at `slot`, returning the gold credited
    pub fn sell(&mut self, team: Team, slot: Slot) -> GameResult<u32> {
        log::action("sell", &format!("team={} slot={:?}", team.as_str(), slot));
        let competitor = side_mut(&mut self.player, &mut self.opponent, team);
        let result = economy::sell(competitor, slot);
        self.finish_action(team, result)
    }

    /// Move a unit between or within zones
    pub fn move_unit(&mut self, team: Team, origin: Slot, destination: Option<Slot>) -> GameResult<()> {
        log::action(
            "move_unit",
            &format!("team={} from={:?} to={:?}", team.as_str(), origin, destination),
        );
        let competitor = side_mut(&mut self.player, &mut self.opponent, team);
        let result = positions::move_unit(competitor, origin, destination);
        self.finish_action(team, result)
    }

    /// Level up if affordable, returning the resulting level
    pub fn level_up(&mut self, team: Team) -> u32 {
        log::action("level_up", team.as_str());
        let competitor = side_mut(&mut self.player, &mut self.opponent, team);
        let level = economy::level_up(competitor);
        self.observer.notify(&MatchEvent::BoardChanged { team });
        level
    }

    /// Pay one gold for a new shop. With no gold the current shop is returned unchanged.
    pub fn reroll_shop(&mut self, team: Team) -> &[Option<UnitTemplate>] {
        log::action("reroll_shop", team.as_str());
        let competitor = side_mut(&mut self.player, &mut self.opponent, team);
        let gold_before = competitor.gold;
        economy::reroll_shop(competitor, &self.catalog, &mut self.rng);
        if self.competitor(team).gold < gold_before {
            self.observer.notify(&MatchEvent::ShopRefreshed { team });
        }
        self.observer.notify(&MatchEvent::BoardChanged { team });
        self.shop(team)
    }

    /// Equip inventory item `item_index` onto the unit at `slot`
    pub fn use_item(&mut self, team: Team, item_index: usize, slot: Slot) -> GameResult<()> {
        log::action(
            "use_item",
            &format!("team={} item={} slot={:?}", team.as_str(), item_index, slot),
        );
        let competitor = side_mut(&mut self.player, &mut self.opponent, team);
        let result = economy::use_item(competitor, item_index, slot);
        self.finish_action(team, result)
    }

    // ==========================================
    // PHASES
    // ==========================================

    /// Give both competitors a fresh shop for their level, free of charge
    pub fn start_shop_phase(&mut self) {
        log::info("=== SHOP PHASE ===");
        for team in [Team::Player, Team::Opponent] {
            let competitor = side_mut(&mut self.player, &mut self.opponent, team);
            let level = competitor.level;
            competitor.shop.reroll(level, &self.catalog.units, &mut self.rng);
            self.observer.notify(&MatchEvent::ShopRefreshed { team });
        }
    }

    /// Recompute trait bonuses on both battlefields. Call right before the attack phase.
    pub fn apply_trait_bonuses(&mut self) {
        for team in [Team::Player, Team::Opponent] {
            let competitor = side_mut(&mut self.player, &mut self.opponent, team);
            traits::apply_trait_bonuses(competitor, &self.catalog);
            self.observer.notify(&MatchEvent::TraitsApplied { team });
        }
    }

    /// Resolve one round of combat and settle its rewards
    pub fn start_attack_phase(&mut self) -> &RoundReport {
        log::info("=== ATTACK PHASE ===");
        let report = resolve_round(
            &mut self.player,
            &mut self.opponent,
            &mut self.round,
            &self.catalog,
            self.config.max_exchanges,
            &mut self.rng,
            self.observer.as_mut(),
        );
        self.observer.notify(&MatchEvent::StatsReset);
        self.log_state();
        self.last_report.insert(report)
    }

    /// Restore every battlefield unit to its captured stats
    pub fn reset_unit_stats(&mut self) {
        self.player.reset_battlefield_stats();
        self.opponent.reset_battlefield_stats();
        self.observer.notify(&MatchEvent::StatsReset);
    }

    /// Let the heuristic driver play the opponent's shop phase
    pub fn run_opponent_turn(&mut self) -> HeuristicTurn {
        log::action("run_opponent_turn", "heuristic");
        let turn = run_heuristic_turn(
            &mut self.opponent,
            &self.catalog,
            &mut self.rng,
            &mut self.next_unit_id,
        );
        self.observer.notify(&MatchEvent::BoardChanged {
            team: Team::Opponent,
        });
        turn
    }
}

// Private implementation methods
impl GameEngine {
    fn finish_action<T>(&mut self, team: Team, result: GameResult<T>) -> GameResult<T> {
        match &result {
            Ok(_) => {
                log::result(true, team.as_str());
                self.observer.notify(&MatchEvent::BoardChanged { team });
            }
            Err(e) => log::result(false, &format!("{:?}", e)),
        }
        result
    }

    fn log_state(&self) {
        for team in [Team::Player, Team::Opponent] {
            let competitor = self.competitor(team);
            log::state_summary(
                team.as_str(),
                self.round,
                competitor.health,
                competitor.gold,
                competitor.level,
                competitor.battlefield_unit_count(),
            );
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
