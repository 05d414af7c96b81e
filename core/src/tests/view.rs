use super::*;
use crate::battle::Team;
use crate::engine::GameEngine;
use crate::state::MatchConfig;
use crate::view::{CompetitorView, MatchView, UnitView};

#[test]
fn test_match_view_from_engine_maps_both_sides() {
    let mut engine = GameEngine::new(MatchConfig::default());
    engine.start_shop_phase();
    {
        let player = engine.competitor_mut(Team::Player);
        player.gold = 0;
        player.battlefield[0] = Some(create_trait_unit(1, Trait::Pyro, 3, 7));
        player.battlefield[1] = Some(create_trait_unit(2, Trait::Pyro, 4, 6));
        player.bench[2] = Some(create_unit(3, 1, 1));
        player.inventory.push(create_item(2, ItemTier::OneStar, 2, -1));
    }
    engine.apply_trait_bonuses();

    let view = MatchView::from_engine(&engine);

    assert_eq!(view.round, 0);
    assert!(!view.game_over);
    assert_eq!(view.winner, None);

    let player = &view.player;
    assert_eq!(player.health, STARTING_HEALTH);
    assert_eq!(player.gold, 0);
    assert_eq!(player.level, 1);
    assert_eq!(player.battlefield.len(), 7);
    assert_eq!(player.bench.len(), 7);
    assert_eq!(player.inventory.len(), 1);
    assert_eq!(player.active_traits, vec![(Trait::Pyro, 2)]);
    assert!(player.battlefield[0].as_ref().is_some_and(|u| u.boosted));
    assert!(player.bench[2].as_ref().is_some_and(|u| !u.boosted));

    // Nothing is affordable with zero gold
    assert_eq!(player.shop.len(), 3);
    assert!(player.shop.iter().flatten().all(|offer| !offer.affordable));
    assert!(view.opponent.shop.iter().flatten().all(|offer| offer.affordable));
}

#[test]
fn test_unit_view_keeps_base_and_live_stats() {
    let mut unit = create_unit(5, 3, 8);
    unit.take_damage(6);

    let view = UnitView::from(&unit);

    assert_eq!(view.id, UnitId(5));
    assert_eq!((view.attack, view.health), (3, 2));
    assert_eq!((view.base_attack, view.base_health), (3, 8));
}

#[test]
fn test_views_serialize_camel_case() {
    let mut competitor = competitor_with(vec![create_unit(1, 2, 2)]);
    competitor.inventory.push(create_item(11, ItemTier::ThreeStar, 6, 3));
    let view = CompetitorView::from_competitor(&competitor, vec![(Trait::Geo, 2)]);

    let json = serde_json::to_value(&view).expect("view serializes");

    assert_eq!(json["battlefield"][0]["baseAttack"], 2);
    assert_eq!(json["battlefield"][0]["unitTrait"], "geo");
    assert!(json["battlefield"][1].is_null());
    assert_eq!(json["inventory"][0]["tier"], "threeStar");
    assert_eq!(json["activeTraits"][0][0], "geo");

    let back: CompetitorView = serde_json::from_value(json).expect("view deserializes");
    assert_eq!(back, view);
}

#[test]
fn test_match_view_reports_winner() {
    let config = MatchConfig {
        starting_health: 1,
        ..MatchConfig::default()
    };
    let mut engine = GameEngine::new(config);
    engine.competitor_mut(Team::Player).battlefield[0] = Some(create_unit(1, 1, 1));
    engine.start_attack_phase();

    let view = MatchView::from_engine(&engine);
    let json = serde_json::to_value(&view).expect("view serializes");

    assert!(view.game_over);
    assert_eq!(view.winner, Some(Team::Player));
    assert_eq!(json["gameOver"], true);
    assert_eq!(json["winner"], "player");
}
