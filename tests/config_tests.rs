//! Configuration loading tests.
//!
//! Configs arrive from the storage layer as serde data; these tests feed
//! JSON through `build` the way a loader would.

mod common;

use rust_boardgame::{
    build, AnyGame, Dice, ErrorKind, ExtraTurnPolicy, Game, GameConfig, GameError, GameRng, GameRngState,
    LinearBoard, Player, RuleEngine, RulesConfig, ScriptedFaces, SnakesAndLadders, Token, Variant,
};

use common::{birthdate, init_tracing, spec};

const LINEAR_JSON: &str = r#"{
    "board": { "shape": "linear", "size": 50 },
    "rules": {
        "snakes_and_ladders": {
            "snakes": { "40": 3, "47": 21 },
            "ladders": { "2": 30 },
            "policy": "EvenButNot12"
        }
    },
    "dice": 2,
    "seed": 17,
    "players": [
        { "name": "Ann", "token": "Red", "birthdate": "1990-01-01" },
        { "name": "Bob", "token": "Orange", "birthdate": "1985-06-30" }
    ]
}"#;

/// A full snakes-and-ladders config builds a typed game.
#[test]
fn test_linear_config_from_json() {
    init_tracing();
    let config: GameConfig = serde_json::from_str(LINEAR_JSON).unwrap();
    let mut game = build(config).unwrap();

    let linear = game.as_linear_mut().unwrap();
    assert_eq!(linear.board_size(), 51);
    assert_eq!(linear.rules().policy(), ExtraTurnPolicy::EvenButNot12);
    assert_eq!(linear.rules().pieces_per_player(), 1);
    assert_eq!(linear.players()[1].token(), Token::Orange);
    assert_eq!(linear.rules().jump_from(rust_boardgame::LinearTile(2)).map(|(t, _)| t.0), Some(30));
}

/// Ludo needs only the shape and rule tags.
#[test]
fn test_ludo_config_from_json() {
    init_tracing();
    let json = r#"{
        "board": { "shape": "ludo" },
        "rules": "ludo",
        "players": [
            { "name": "Ann", "token": "Green", "birthdate": "1990-01-01" },
            { "name": "Bob", "token": "Blue", "birthdate": "1991-02-02" }
        ]
    }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.dice_count(), 1);
    let mut game = build(config).unwrap();

    game.play_turn().unwrap();
    assert_eq!(game.last_dice().len(), 1);
    assert_eq!(game.variant(), Variant::Ludo);
    assert_eq!(game.board_size(), 52 + 4 * 6);
    match game {
        AnyGame::Ludo(ludo) => assert!(ludo.players().iter().all(|p| p.piece_count() == 4)),
        AnyGame::Linear(_) => panic!("expected Ludo"),
    }
}

/// Mismatched board and rules are rejected as an illegal operation.
#[test]
fn test_mismatched_variants_rejected() {
    let json = r#"{
        "board": { "shape": "linear", "size": 30 },
        "rules": "ludo",
        "players": [{ "name": "Ann", "token": "Red", "birthdate": "1990-01-01" }]
    }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    let err = build(config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalOperation);
}

/// Incomplete roster records fail as configuration errors.
#[test]
fn test_incomplete_player_rejected() {
    let json = r#"{
        "board": { "shape": "linear", "size": 30 },
        "rules": { "snakes_and_ladders": {} },
        "players": [{ "name": "Ann", "token": "Red" }]
    }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    let err = build(config).unwrap_err();
    assert_eq!(err, GameError::MissingBirthdate { name: "Ann".into() });
    assert!(err.is_configuration());
}

/// Jumps off the end of the board are rejected.
#[test]
fn test_jump_off_board_rejected() {
    let json = r#"{
        "board": { "shape": "linear", "size": 30 },
        "rules": { "snakes_and_ladders": { "ladders": { "5": 31 } } },
        "players": [{ "name": "Ann", "token": "Red", "birthdate": "1990-01-01" }]
    }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    assert!(matches!(
        build(config),
        Err(GameError::JumpOutOfRange { kind: "ladder", from: 5, to: 31, size: 30 })
    ));
}

/// A snake on the end tile would make the game unwinnable, so the config is
/// refused.
#[test]
fn test_snake_on_end_tile_rejected() {
    init_tracing();
    let config = GameConfig::snakes_and_ladders(10)
        .with_rules(RulesConfig::snakes_and_ladders().with_snake(10, 1))
        .with_seed(1)
        .with_player(spec("Ann", Token::Red));

    let err = build(config).unwrap_err();
    assert_eq!(err, GameError::JumpFromEnd { kind: "snake", tile: 10 });
    assert!(err.is_configuration());

    let json = r#"{
        "board": { "shape": "linear", "size": 30 },
        "rules": { "snakes_and_ladders": { "ladders": { "30": 30 } } },
        "players": [{ "name": "Ann", "token": "Red", "birthdate": "1990-01-01" }]
    }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    assert!(matches!(build(config), Err(GameError::JumpFromEnd { kind: "ladder", tile: 30 })));
}

/// Degenerate Ludo geometry is a configuration error.
#[test]
fn test_bad_geometry_rejected() {
    let json = r#"{
        "board": { "shape": "ludo", "geometry": { "ring_len": 50, "lane_len": 6, "goal_band": 1 } },
        "rules": "ludo",
        "players": [{ "name": "Ann", "token": "Red", "birthdate": "1990-01-01" }]
    }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    let err = build(config).unwrap_err();
    assert!(matches!(err, GameError::InvalidGeometry(_)));
    assert!(err.is_configuration());
}

/// RNG state survives serialization, so a stored session rolls the same dice.
#[test]
fn test_rng_state_resumes() {
    let mut rng = GameRng::new(5);
    for _ in 0..10 {
        rng.roll_die();
    }

    let json = serde_json::to_string(&rng.state()).unwrap();
    let state: GameRngState = serde_json::from_str(&json).unwrap();
    let mut resumed = GameRng::from_state(&state);

    for _ in 0..20 {
        assert_eq!(rng.roll_die(), resumed.roll_die());
    }
}

/// A session stored mid-game through its RNG state rolls on exactly where the
/// live game would have.
#[test]
fn test_game_resumes_from_saved_rng_state() {
    init_tracing();
    let config = GameConfig::snakes_and_ladders(1000)
        .with_seed(8)
        .with_player(spec("Ann", Token::Red))
        .with_player(spec("Bob", Token::Blue));

    let mut live = build(config.clone()).unwrap();
    for _ in 0..10 {
        live.play_turn().unwrap();
    }

    let saved = serde_json::to_string(&live.rng_state().unwrap()).unwrap();
    let state: GameRngState = serde_json::from_str(&saved).unwrap();
    let stored = serde_json::to_string(&config.with_rng_state(state)).unwrap();

    let mut resumed = build(serde_json::from_str(&stored).unwrap()).unwrap();
    assert_eq!(resumed.rng_state(), live.rng_state());

    for _ in 0..20 {
        assert_eq!(live.play_turn().unwrap(), resumed.play_turn().unwrap());
        assert_eq!(live.last_dice(), resumed.last_dice());
    }
}

/// Scripted dice have no RNG position to capture.
#[test]
fn test_scripted_game_has_no_rng_state() {
    let dice = Dice::new(1, ScriptedFaces::new([2])).unwrap();
    let roster = vec![Player::new("Ann", Token::Red, birthdate(), 1).unwrap()];
    let game = Game::<SnakesAndLadders>::new(roster, LinearBoard::new(20).unwrap(), SnakesAndLadders::default(), dice)
        .unwrap();
    assert_eq!(game.rng_state(), None);
}
