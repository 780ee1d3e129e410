use wildfield::{Catalog, Game, GameConfig, SaveFile, rng::game_rng, ui::ConsoleUi};

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from_env();
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load_or_default(path),
        None => Catalog::default(),
    };
    let rng = game_rng(config.seed);
    let ui = ConsoleUi::new(config.pace);
    let store = config.save_path.as_ref().map(SaveFile::new);

    let mut game = Game::new(config, catalog, rng, ui);
    if let Some(store) = store {
        game = game.with_store(store);
    }
    game.run();
}
