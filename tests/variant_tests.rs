//! Variant-specific rules: mana curves, winning conditions, hero powers and
//! shuffled decks.

use stone_ccg::core::{GameConfig, Player};
use stone_ccg::error::RuleViolation;
use stone_ccg::events::{EventLog, GameEvent};
use stone_ccg::game::Game;
use stone_ccg::variants::{GameBuilder, Variant};
use stone_ccg::CardId;

fn build(variant: Variant) -> Game {
    GameBuilder::new(variant).seed(42).build().unwrap()
}

fn hand_card(game: &Game, player: Player, name: &str) -> CardId {
    game.hand(player)
        .iter()
        .find(|card| card.name() == name)
        .map(|card| card.id())
        .unwrap_or_else(|| panic!("{name} not in hand of {player}"))
}

fn play(game: &mut Game, player: Player, name: &str) -> CardId {
    let card = hand_card(game, player, name);
    let index = game.field_size(player);
    assert_eq!(game.play_card(player, card, index), Ok(()));
    card
}

fn wins(log: &EventLog) -> Vec<Player> {
    log.events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::GameWon { player } => Some(player),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Beta: growing mana, hero health
// ============================================================================

#[test]
fn test_beta_mana_grows_to_cap() {
    let mut game = build(Variant::Beta);
    let mut seen = vec![game.hero(Player::First).mana()];

    for _ in 0..9 {
        game.end_turn();
        game.end_turn();
        seen.push(game.hero(Player::First).mana());
    }

    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 7, 7, 7]);
    assert_eq!(game.hero(Player::Second).mana(), 7);
}

#[test]
fn test_beta_hero_health_win() {
    let log = EventLog::new();
    let mut game = GameBuilder::new(Variant::Beta)
        .config(
            GameConfig::default()
                .with_hero_health(2)
                .with_starting_hand_size(7),
        )
        .observer(log.clone())
        .build()
        .unwrap();

    game.end_turn();
    assert_eq!(game.hero(Player::First).health(), 0);
    assert_eq!(game.winner(), Some(Player::Second));

    // Both heroes down: the player in turn takes it
    game.end_turn();
    assert_eq!(game.hero(Player::Second).health(), 0);
    assert_eq!(game.player_in_turn(), Player::First);
    assert_eq!(game.winner(), Some(Player::First));

    assert_eq!(wins(&log), vec![Player::Second, Player::First]);
}

#[test]
fn test_beta_minion_attack_can_win() {
    let mut game = GameBuilder::new(Variant::Beta)
        .config(GameConfig::default().with_hero_health(1))
        .build()
        .unwrap();
    let uno = play(&mut game, Player::First, "Uno");
    game.end_turn();
    game.end_turn();

    assert_eq!(game.attack_hero(Player::First, uno), Ok(()));
    assert_eq!(game.hero(Player::Second).health(), 0);
    assert_eq!(game.winner(), Some(Player::First));
}

// ============================================================================
// Gamma: chef powers
// ============================================================================

#[test]
fn test_gamma_thai_chef_damages_opponent() {
    let mut game = build(Variant::Gamma);
    let log = EventLog::new();
    game.subscribe(log.clone());

    assert_eq!(game.use_power(Player::First), Ok(()));

    assert_eq!(game.hero(Player::First).mana(), 1);
    assert_eq!(game.hero(Player::Second).health(), 19);
    assert_eq!(
        log.events(),
        vec![
            GameEvent::PowerUsed { player: Player::First },
            GameEvent::HeroUpdated { player: Player::First },
            GameEvent::HeroUpdated { player: Player::Second },
        ]
    );
}

#[test]
fn test_gamma_danish_chef_summons_sovs() {
    let mut game = build(Variant::Gamma);
    game.end_turn();
    let log = EventLog::new();
    game.subscribe(log.clone());

    assert_eq!(game.use_power(Player::Second), Ok(()));

    assert_eq!(game.field_size(Player::Second), 1);
    let sovs = game.card_in_field(Player::Second, 0);
    assert_eq!(sovs.name(), "Sovs");
    assert_eq!(sovs.owner(), Player::Second);
    assert!(!sovs.is_active());
    assert!(log.contains(|e| *e
        == GameEvent::CardSummoned {
            player: Player::Second,
            card: sovs.id(),
            index: 0
        }));

    assert_eq!(
        game.use_power(Player::Second),
        Err(RuleViolation::PowerUseNotAllowedTwicePrRound)
    );
    assert_eq!(game.field_size(Player::Second), 1);
}

#[test]
fn test_gamma_sovs_fights_next_turn() {
    let mut game = build(Variant::Gamma);
    game.end_turn();
    game.use_power(Player::Second).unwrap();
    let sovs = game.card_in_field(Player::Second, 0).id();

    game.end_turn();
    game.end_turn();

    assert_eq!(game.attack_hero(Player::Second, sovs), Ok(()));
    assert_eq!(game.hero(Player::First).health(), 20);
}

// ============================================================================
// Delta: shuffled dishes
// ============================================================================

#[test]
fn test_delta_opening_hand_is_playable() {
    for seed in 0..25 {
        let game = GameBuilder::new(Variant::Delta).seed(seed).build().unwrap();
        for player in Player::BOTH {
            // Hand holds the first three draws, newest at the front
            assert!(game.card_in_hand(player, 2).mana_cost() <= 1, "seed {seed}");
            assert!(game.card_in_hand(player, 1).mana_cost() <= 2, "seed {seed}");
            assert!(game.card_in_hand(player, 0).mana_cost() <= 4, "seed {seed}");
            assert_eq!(game.hero(player).mana(), 7);
        }
    }
}

#[test]
fn test_delta_same_seed_same_decks() {
    let order = |game: &Game, player| -> Vec<String> {
        game.deck(player).iter().map(|c| c.name().to_string()).collect()
    };
    let a = GameBuilder::new(Variant::Delta).seed(9).build().unwrap();
    let b = GameBuilder::new(Variant::Delta).seed(9).build().unwrap();

    assert_eq!(order(&a, Player::First), order(&b, Player::First));
    assert_eq!(order(&a, Player::Second), order(&b, Player::Second));
}

// ============================================================================
// Epsilon: field emptiness
// ============================================================================

#[test]
fn test_epsilon_empty_fields_default_to_first() {
    let mut game = build(Variant::Epsilon);
    for _ in 0..9 {
        game.end_turn();
        assert_eq!(game.winner(), None);
    }
    game.end_turn();
    assert_eq!(game.turn_number(), 10);
    assert_eq!(game.winner(), Some(Player::First));
}

#[test]
fn test_epsilon_only_occupied_field_wins() {
    let mut game = build(Variant::Epsilon);
    game.end_turn();
    play(&mut game, Player::Second, "Uno");
    for _ in 1..10 {
        game.end_turn();
    }

    assert_eq!(game.turn_number(), 10);
    assert_eq!(game.winner(), Some(Player::Second));
}

#[test]
fn test_epsilon_both_fields_occupied_is_open() {
    let mut game = build(Variant::Epsilon);
    play(&mut game, Player::First, "Uno");
    game.end_turn();
    play(&mut game, Player::Second, "Uno");
    for _ in 1..10 {
        game.end_turn();
    }

    assert_eq!(game.winner(), None);
}

// ============================================================================
// Zeta: staged winning
// ============================================================================

#[test]
fn test_zeta_stages_change_verdict() {
    let log = EventLog::new();
    let mut game = GameBuilder::new(Variant::Zeta)
        .observer(log.clone())
        .build()
        .unwrap();

    game.end_turn();
    play(&mut game, Player::Second, "Uno");

    while game.turn_number() < 6 {
        assert_eq!(game.winner(), None);
        game.end_turn();
    }
    // Mid game: only the second player has a minion
    assert_eq!(game.winner(), Some(Player::Second));

    while game.turn_number() < 16 {
        assert_eq!(game.winner(), Some(Player::Second));
        game.end_turn();
    }
    // Late game: the first player wins outright
    assert_eq!(game.winner(), Some(Player::First));

    assert_eq!(wins(&log), vec![Player::Second, Player::First]);
}

#[test]
fn test_zeta_early_game_is_hero_health() {
    let mut game = GameBuilder::new(Variant::Zeta)
        .config(
            GameConfig::default()
                .with_hero_health(2)
                .with_starting_hand_size(7),
        )
        .build()
        .unwrap();

    game.end_turn();
    assert_eq!(game.winner(), Some(Player::Second));
}

// ============================================================================
// Eta: random chefs, seasoned dishes
// ============================================================================

#[test]
fn test_eta_decks_carry_effects() {
    let game = build(Variant::Eta);
    let described = Player::BOTH
        .iter()
        .flat_map(|&p| game.deck(p).iter().chain(game.hand(p).iter()))
        .filter(|card| card.effect().is_some())
        .count();

    // Eight of the twelve seasoned dishes have effects, two copies each per player
    assert_eq!(described, 32);
}

#[test]
fn test_eta_game_is_reproducible() {
    let run = |seed| {
        let mut game = GameBuilder::new(Variant::Eta).seed(seed).build().unwrap();
        for _ in 0..6 {
            let player = game.player_in_turn();
            let _ = game.use_power(player);
            let playable: Vec<CardId> = game
                .hand(player)
                .iter()
                .filter(|card| card.mana_cost() <= game.hero(player).mana())
                .map(|card| card.id())
                .take(1)
                .collect();
            for card in playable {
                let _ = game.play_card(player, card, 0);
            }
            game.end_turn();
        }
        game.snapshot()
    };

    assert_eq!(run(5), run(5));
}
