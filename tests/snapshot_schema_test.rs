use falling_balls::config::SimulateOptions;
use falling_balls::core::{Game, GameSnapshot, ManualClock};
use falling_balls::simulate::run_headless;

#[test]
fn snapshot_json_has_expected_fields() {
    let mut game = Game::with_clock(3, ManualClock::new(0));
    game.set_num_blocks(2).unwrap();
    game.start();

    let v = serde_json::to_value(game.snapshot()).unwrap();
    for key in [
        "session",
        "state",
        "size",
        "elapsed_nanos",
        "score",
        "num_blocks",
        "started",
        "paused",
        "finished",
        "pieces",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["state"], "running");
    assert_eq!(v["pieces"].as_array().unwrap().len(), 2);
    assert_eq!(v["pieces"][0]["color"], "red");
    assert_eq!(v["pieces"][1]["velocity"], 6.5);
}

#[test]
fn headless_output_parses_back() {
    let opts = SimulateOptions {
        frames: 90,
        click_every: Some(30),
        ..SimulateOptions::default()
    };
    let snap = run_headless(4, 11, &opts).unwrap();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.score, 5 + 6 + 8);
    assert_eq!(back.pieces.iter().filter(|p| p.clicked).count(), 3);
    assert!(!back.finished);
}
