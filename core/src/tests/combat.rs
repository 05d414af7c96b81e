use super::*;
use crate::battle::*;
use crate::catalog::Catalog;
use crate::limits::LimitReason;
use crate::observer::{MatchEvent, NoopObserver};
use crate::rng::XorShiftRng;
use crate::state::DEFAULT_MAX_EXCHANGES;

fn resolve(
    player: &mut Competitor,
    opponent: &mut Competitor,
    round: &mut u32,
    rng: &mut impl MatchRng,
) -> RoundReport {
    resolve_round(
        player,
        opponent,
        round,
        &Catalog::builtin(),
        DEFAULT_MAX_EXCHANGES,
        rng,
        &mut NoopObserver,
    )
}

#[test]
fn test_single_exchange_defender_survives() {
    // A: 3 attack / 10 health, B: 10 attack / 5 health
    let mut player = competitor_with(vec![create_unit(1, 3, 10)]);
    let mut opponent = competitor_with(vec![create_unit(2, 10, 5)]);
    let mut round = 0;
    // player starts, defender index 0, no item for the loss
    let mut rng = ScriptedRng::new(&[0, 0, 99]);

    let report = resolve(&mut player, &mut opponent, &mut round, &mut rng);

    assert_eq!(report.round, 1);
    assert_eq!(report.first_attacker, Team::Player);
    assert_eq!(report.exchanges.len(), 1);
    let exchange = &report.exchanges[0];
    assert_eq!(exchange.attacker_health, 0);
    assert_eq!(exchange.defender_health, 2);
    assert_eq!(exchange.casualties, Casualties::Attacker);
    assert_eq!(report.outcome, RoundOutcome::Victory(Team::Opponent));

    // Loser: +2 for the lost unit, +1 x round, -1 x round health
    assert_eq!(player.gold, STARTING_GOLD + 2 + 1);
    assert_eq!(player.health, STARTING_HEALTH - 1);
    // Winner: +2 x round
    assert_eq!(opponent.gold, STARTING_GOLD + 2);
    assert_eq!(opponent.health, STARTING_HEALTH);

    assert_stats_restored(&player);
    assert_stats_restored(&opponent);
    assert_eq!(player.battlefield[0].as_ref().map(|u| u.health()), Some(10));
}

#[test]
fn test_single_exchange_same_result_when_opponent_starts() {
    let mut player = competitor_with(vec![create_unit(1, 3, 10)]);
    let mut opponent = competitor_with(vec![create_unit(2, 10, 5)]);
    let mut round = 0;
    let mut rng = ScriptedRng::new(&[1, 0, 99]);

    let report = resolve(&mut player, &mut opponent, &mut round, &mut rng);

    assert_eq!(report.first_attacker, Team::Opponent);
    assert_eq!(report.exchanges.len(), 1);
    assert_eq!(report.exchanges[0].casualties, Casualties::Defender);
    assert_eq!(report.outcome, RoundOutcome::Victory(Team::Opponent));
    assert_eq!(player.gold, STARTING_GOLD + 3);
    assert_eq!(player.health, STARTING_HEALTH - 1);
    assert_eq!(opponent.gold, STARTING_GOLD + 2);
}

#[test]
fn test_round_counter_and_settlement_scale_with_round() {
    let mut player = competitor_with(vec![create_unit(1, 3, 10)]);
    let mut opponent = competitor_with(vec![create_unit(2, 10, 5)]);
    let mut round = 0;
    let mut rng = ScriptedRng::new(&[0, 0, 99]);

    resolve(&mut player, &mut opponent, &mut round, &mut rng);
    assert_eq!(round, 1);
    let (player_gold, opponent_gold) = (player.gold, opponent.gold);

    let report = resolve(&mut player, &mut opponent, &mut round, &mut rng);
    assert_eq!(round, 2);
    assert_eq!(report.round, 2);
    assert_eq!(player.gold, player_gold + 2 + 2);
    assert_eq!(player.health, STARTING_HEALTH - 1 - 2);
    assert_eq!(opponent.gold, opponent_gold + 4);
}

#[test]
fn test_both_units_die_is_a_draw_with_two_rewards() {
    let mut player = competitor_with(vec![create_unit(1, 5, 5)]);
    let mut opponent = competitor_with(vec![create_unit(2, 5, 5)]);
    let mut round = 0;
    let mut rng = ScriptedRng::new(&[0, 0, 99, 99]);

    let report = resolve(&mut player, &mut opponent, &mut round, &mut rng);

    assert_eq!(report.exchanges[0].casualties, Casualties::Both);
    assert_eq!(report.outcome, RoundOutcome::Draw);
    // Unit-loss gold only, no settlement on a draw
    assert_eq!(player.gold, STARTING_GOLD + 2);
    assert_eq!(opponent.gold, STARTING_GOLD + 2);
    assert_eq!(player.health, STARTING_HEALTH);
    assert_eq!(opponent.health, STARTING_HEALTH);
}

#[test]
fn test_empty_battlefield_loses_before_any_exchange() {
    let mut player = competitor_with(vec![]);
    let mut opponent = competitor_with(vec![create_unit(2, 1, 1)]);
    let mut round = 0;
    let mut rng = ScriptedRng::new(&[0]);

    let report = resolve(&mut player, &mut opponent, &mut round, &mut rng);
    assert!(report.exchanges.is_empty());
    assert_eq!(report.outcome, RoundOutcome::Victory(Team::Opponent));
    assert_eq!(player.health, STARTING_HEALTH - 1);

    let mut empty_a = competitor_with(vec![]);
    let mut empty_b = competitor_with(vec![]);
    let report = resolve(&mut empty_a, &mut empty_b, &mut round, &mut rng);
    assert_eq!(report.outcome, RoundOutcome::Draw);
    assert_eq!(round, 2);
}

#[test]
fn test_stalled_round_hits_exchange_cap() {
    let mut player = competitor_with(vec![create_unit(1, 0, 5)]);
    let mut opponent = competitor_with(vec![create_unit(2, 0, 5)]);
    let mut round = 0;
    let mut rng = ScriptedRng::new(&[0]);

    let report = resolve_round(
        &mut player,
        &mut opponent,
        &mut round,
        &Catalog::builtin(),
        10,
        &mut rng,
        &mut NoopObserver,
    );

    assert_eq!(report.exchanges.len(), 10);
    assert_eq!(report.outcome, RoundOutcome::Draw);
    assert_eq!(report.limit_exceeded, Some(LimitReason::ExchangeCap { max: 10 }));
    assert!(report
        .exchanges
        .iter()
        .all(|e| e.casualties == Casualties::None));
    assert_eq!(player.gold, STARTING_GOLD);
    assert_eq!(opponent.gold, STARTING_GOLD);
}

#[test]
fn test_attacker_is_first_living_unit() {
    let mut competitor = competitor_with(vec![]);
    competitor.battlefield[1] = Some(create_unit(1, 4, 0));
    competitor.battlefield[3] = Some(create_unit(2, 4, 4));
    competitor.battlefield[5] = Some(create_unit(3, 4, 4));

    assert_eq!(select_attacker(&competitor), Some(3));
    assert_eq!(select_attacker(&competitor_with(vec![])), None);
}

#[test]
fn test_defender_is_drawn_among_living_units() {
    let mut competitor = competitor_with(vec![]);
    competitor.battlefield[1] = Some(create_unit(1, 4, -3));
    competitor.battlefield[3] = Some(create_unit(2, 4, 4));
    competitor.battlefield[5] = Some(create_unit(3, 4, 4));

    assert_eq!(select_defender(&competitor, &mut ScriptedRng::new(&[0])), Some(3));
    assert_eq!(select_defender(&competitor, &mut ScriptedRng::new(&[1])), Some(5));
    assert_eq!(select_defender(&competitor, &mut ScriptedRng::new(&[2])), Some(3));

    let mut rng = XorShiftRng::seed_from_u64(7);
    for _ in 0..100 {
        let slot = select_defender(&competitor, &mut rng);
        assert!(matches!(slot, Some(3 | 5)));
    }
}

#[test]
fn test_dead_units_stay_on_the_board_until_reset() {
    let mut player = competitor_with(vec![create_unit(1, 10, 10)]);
    let mut opponent = competitor_with(vec![create_unit(2, 1, 3), create_unit(3, 1, 30)]);
    let mut combatants = Combatants::new(&mut player, &mut opponent);

    let exchange = execute_exchange(&mut combatants, Team::Player, &mut ScriptedRng::new(&[0]))
        .expect("both sides have living units");
    assert_eq!(exchange.casualties, Casualties::Defender);
    assert_eq!(combatants.status(), None);

    let dead = combatants.opponent.battlefield[0]
        .as_ref()
        .expect("dead unit keeps its slot");
    assert!(!dead.is_alive());
    assert_eq!(dead.health(), -7);
}

#[test]
fn test_exchange_uses_pre_damage_attack() {
    let mut player = competitor_with(vec![create_unit(1, 6, 6)]);
    let mut opponent = competitor_with(vec![create_unit(2, 6, 6)]);
    let mut combatants = Combatants::new(&mut player, &mut opponent);

    let exchange = execute_exchange(&mut combatants, Team::Opponent, &mut ScriptedRng::new(&[0]))
        .expect("both sides have living units");
    assert_eq!(exchange.attacker_team, Team::Opponent);
    assert_eq!(exchange.casualties, Casualties::Both);
    assert_eq!(combatants.status(), Some(RoundOutcome::Draw));
}

#[test]
fn test_every_round_has_one_outcome_and_resets_stats() {
    for seed in 0..25u64 {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let mut player = competitor_with(
            (0..4)
                .map(|i| create_unit(i, 1 + rng.gen_range(6) as i32, 1 + rng.gen_range(12) as i32))
                .collect(),
        );
        let mut opponent = competitor_with(
            (0..3)
                .map(|i| create_unit(10 + i, 1 + rng.gen_range(6) as i32, 1 + rng.gen_range(12) as i32))
                .collect(),
        );
        let mut round = seed as u32;

        let report = resolve(&mut player, &mut opponent, &mut round, &mut rng);

        assert_eq!(round, seed as u32 + 1);
        assert!(report.limit_exceeded.is_none());
        // A round only ends after the exchange that emptied a battlefield
        let last = report.exchanges.last().expect("both sides start alive");
        assert_ne!(last.casualties, Casualties::None);
        if let RoundOutcome::Victory(winner) = report.outcome {
            let loser = match winner {
                Team::Player => &opponent,
                Team::Opponent => &player,
            };
            assert_eq!(loser.health, STARTING_HEALTH - round as i32);
        }
        assert_stats_restored(&player);
        assert_stats_restored(&opponent);
    }
}

#[test]
fn test_observer_sees_every_exchange_then_round_end() {
    let mut player = competitor_with(vec![create_unit(1, 2, 9)]);
    let mut opponent = competitor_with(vec![create_unit(2, 3, 7)]);
    let mut round = 0;
    let mut rng = ScriptedRng::new(&[0, 0, 99]);
    let mut events = Vec::new();
    let mut observer = |event: &MatchEvent| events.push(event.clone());

    let report = resolve_round(
        &mut player,
        &mut opponent,
        &mut round,
        &Catalog::builtin(),
        DEFAULT_MAX_EXCHANGES,
        &mut rng,
        &mut observer,
    );

    let exchange_events = events
        .iter()
        .filter(|e| matches!(e, MatchEvent::Exchange(_)))
        .count();
    assert_eq!(exchange_events, report.exchanges.len());
    assert_eq!(
        events.last(),
        Some(&MatchEvent::RoundEnd {
            round: 1,
            outcome: report.outcome
        })
    );
}

#[test]
fn test_casualties_losing_teams() {
    assert!(Casualties::None.losing_teams(Team::Player).is_empty());
    assert_eq!(Casualties::Attacker.losing_teams(Team::Player), vec![Team::Player]);
    assert_eq!(Casualties::Defender.losing_teams(Team::Player), vec![Team::Opponent]);
    assert_eq!(
        Casualties::Both.losing_teams(Team::Opponent),
        vec![Team::Opponent, Team::Player]
    );
}
