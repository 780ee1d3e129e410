use wildfield::{
    Catalog, Ending, Game, GameConfig, Inventory, SaveFile, Session,
    catalog::{CAVE_REWARD, Creature, STARTER_TOOL},
    rng::game_rng,
    ui::{ScriptedUi, Selection, select_item},
};

fn config() -> GameConfig {
    GameConfig { save_path: None, ..GameConfig::default() }
}

fn game(
    config: GameConfig,
    catalog: Catalog,
    inputs: &[&str],
) -> Game<ScriptedUi, rand::rngs::SmallRng> {
    Game::new(config, catalog, game_rng(Some(9)), ScriptedUi::new(inputs.iter().copied()))
}

fn session_facing(config: &GameConfig, creature: &str) -> Session {
    let mut s = Session::new(config, 0);
    s.pinned = Some(creature.into());
    s
}

#[test]
fn selection_rejects_out_of_range_without_mutating() {
    let catalog = Catalog::default();
    let inv = Inventory::with_items([STARTER_TOOL, "golden coins"]);
    let before = inv.clone();
    let mut ui = ScriptedUi::new(["3", "-1", "abc", "", "2"]);
    assert_eq!(select_item(&mut ui, &inv, &catalog), Selection::Item(1));
    assert_eq!(ui.prompts.len(), 5);
    assert_eq!(inv, before);
    assert!(ui.saw("1. cracked wand (Power: 2)"));
    assert!(ui.saw("2. golden coins (Power: 0)"));
}

#[test]
fn selection_can_be_cancelled() {
    let catalog = Catalog::default();
    let inv = Inventory::with_items([STARTER_TOOL]);
    assert_eq!(select_item(&mut ScriptedUi::new(["q"]), &inv, &catalog), Selection::Cancelled);
    assert_eq!(select_item(&mut ScriptedUi::new(["0"]), &inv, &catalog), Selection::Cancelled);
    let mut exhausted = ScriptedUi::new(Vec::<String>::new());
    assert_eq!(select_item(&mut exhausted, &inv, &catalog), Selection::Cancelled);
    let mut unused = ScriptedUi::new(["1"]);
    assert_eq!(select_item(&mut unused, &Inventory::new(), &catalog), Selection::Empty);
}

#[test]
fn quit_ends_without_replay_prompt() {
    let mut g = game(config(), Catalog::default(), &["9", "hello", "4"]);
    let summary = g.run();
    assert_eq!(summary.ending, Ending::Quit);
    assert_eq!(summary.rounds, 1);
    let ui = g.into_ui();
    assert_eq!(ui.lines.iter().filter(|l| l.contains("Invalid choice")).count(), 2);
    assert!(!ui.prompts.iter().any(|p| p.contains("play again")));
}

#[test]
fn end_of_input_quits() {
    let mut g = game(config(), Catalog::default(), &["2"]);
    assert_eq!(g.run().ending, Ending::Quit);
    assert_eq!(g.session().inventory.items(), [CAVE_REWARD]);
}

#[test]
fn losing_fight_wounds_and_keeps_creature_pinned() {
    let cfg = config();
    let mut g = game(cfg.clone(), Catalog::default(), &["1", "1", "1", "4"])
        .with_session(session_facing(&cfg, "shadow wolf"));
    g.run();
    assert_eq!(g.session().ledger.hit_points, 80);
    assert_eq!(g.session().pinned.as_deref(), Some("shadow wolf"));
    assert!(g.ui().saw("You manage to escape back into the field."));
}

#[test]
fn running_away_changes_nothing() {
    let cfg = config();
    let start = session_facing(&cfg, "fire imp");
    let mut g = game(cfg, Catalog::default(), &["1", "2", "4"]).with_session(start.clone());
    g.run();
    assert_eq!(g.session(), &start);
}

#[test]
fn defeat_then_decline_replay() {
    let cfg = GameConfig { starting_hit_points: 20, ..config() };
    let mut g = game(cfg.clone(), Catalog::default(), &["1", "1", "1", "no"])
        .with_session(session_facing(&cfg, "shadow wolf"));
    let summary = g.run();
    assert_eq!(summary.ending, Ending::Defeat);
    assert_eq!(summary.rounds, 1);
    assert!(g.ui().saw("You have been defeated!"));
    assert_eq!(g.ui().remaining_inputs(), 0);
}

#[test]
fn defeat_replay_starts_fresh() {
    let cfg = GameConfig { starting_hit_points: 10, damage_per_loss: 10, ..config() };
    let mut g = game(cfg.clone(), Catalog::default(), &["1", "1", "1", "yes", "4"])
        .with_session(session_facing(&cfg, "rock titan"));
    let summary = g.run();
    assert_eq!(summary.ending, Ending::Quit);
    assert_eq!(summary.rounds, 2);
    assert_eq!(g.session(), &Session::new(&cfg, 0));
}

#[test]
fn score_carries_over_until_target() {
    let catalog = Catalog::new(
        Catalog::default().tools,
        vec![Creature { name: "marsh imp".into(), power: 1, score: 8 }],
    )
    .unwrap();
    let inputs = ["1", "1", "1", "y", "1", "1", "1", "n"];
    let mut g = game(config(), catalog, &inputs);
    let summary = g.run();
    assert_eq!(summary.ending, Ending::Victory);
    assert_eq!(summary.final_score, 16);
    assert_eq!(summary.rounds, 2);
    assert!(g.ui().saw("Restarting the game while saving your score..."));
    assert!(g.ui().saw("You won by reaching the target score of 10"));
}

#[test]
fn win_below_target_then_stop() {
    let cfg = GameConfig { target_score: 100, ..config() };
    let mut start = session_facing(&cfg, "spectral witch");
    start.inventory = Inventory::with_items(["golden coins", "obsidian blade"]);
    let mut g = game(cfg, Catalog::default(), &["1", "1", "2", "n"]).with_session(start);
    let summary = g.run();
    assert_eq!(summary.ending, Ending::Quit);
    assert_eq!(summary.final_score, 15);
    assert!(g.ui().saw("You have chosen the obsidian blade (Power: 12)."));
    assert!(g.ui().saw("Your final score was 15"));
    assert!(g.ui().saw("But the spectral witch takes one look at your shiny new wand"));
    assert!(!g.ui().saw("shines brightly"));
}

#[test]
fn victory_replay_resets_score() {
    let catalog = Catalog::new(
        Catalog::default().tools,
        vec![Creature { name: "bog imp".into(), power: 1, score: 12 }],
    )
    .unwrap();
    let mut g = game(config(), catalog, &["1", "1", "1", "yes", "4"]);
    let summary = g.run();
    assert_eq!(summary.ending, Ending::Quit);
    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.final_score, 0);
    assert_eq!(g.session().ledger.score, 0);
    assert!(g.ui().saw("You won by reaching the target score of 10"));
    assert!(g.ui().saw("Restarting the game..."));
    assert!(!g.ui().saw("Restarting the game while saving your score..."));
}

#[test]
fn radiant_wand_shines_on_victory() {
    let cfg = GameConfig { target_score: 100, ..config() };
    let mut start = session_facing(&cfg, "shadow wolf");
    start.inventory = Inventory::with_items([CAVE_REWARD]);
    let mut g = game(cfg, Catalog::default(), &["1", "1", "1", "n"]).with_session(start);
    assert_eq!(g.run().final_score, 50);
    assert!(g.ui().saw("The wand of radiance shines brightly in your hand"));
    assert!(!g.ui().saw("takes one look at your shiny new wand"));
}

#[test]
fn quit_saves_and_next_game_resumes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut first =
        game(config(), Catalog::default(), &["2", "4"]).with_store(SaveFile::new(&path));
    first.run();
    assert!(first.ui().saw("Game saved!"));

    let second = game(config(), Catalog::default(), &["4"]).with_store(SaveFile::new(&path));
    assert_eq!(second.session().inventory.items(), [CAVE_REWARD]);
    assert_eq!(second.session().ledger.hit_points, 100);
}
