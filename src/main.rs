//! Pixel Pet entry point
//!
//! The web build is driven from JS through `pixel_pet::web::WebGame`. The
//! native binary plays a short scripted session against an in-memory store.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pixel_pet::{Game, GameConfig, MemoryStore};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pixel Pet (native) starting...");
    log::info!("Native mode has no UI - run with `trunk serve` for the web version");

    let seed = pixel_pet::platform::seed_from_clock();
    let mut game = Game::new(GameConfig::default(), MemoryStore::new(), seed);
    if !game.resume() {
        game.create_new_game("Mochi");
    }

    let fed = game.feed_pet_action();
    log::info!("Feed: {}", if fed { "ok" } else { "not enough coins" });
    let petted = game.pet_pet_action();
    log::info!("Pet: {}", if petted { "ok" } else { "not enough coins" });
    let fed = game.feed_pet_action();
    log::info!("Feed: {}", if fed { "ok" } else { "not enough coins" });

    // Typing challenge: finish a perfect 30 seconds
    if let Some(mut session) = game.start_minigame() {
        session.start(0);
        for _ in 0..45 {
            if let Some(word) = session.current_word().map(str::to_string) {
                session.type_str(&word);
                session.type_char(' ');
            }
        }
        let mut second = 0;
        while !session.tick(second * 1000) {
            second += 1;
        }
        if let Some(result) = session.result() {
            log::info!(
                "Typing: {} WPM, {}% accuracy",
                result.wpm,
                result.accuracy
            );
            if let Some(message) = result.report().message {
                log::info!("{}", message);
            }
        }
        if let Some(coins) = game.finish_minigame(&session) {
            log::info!("Earned {} coins", coins);
        }
    }

    if let Some(state) = game.state() {
        let stats = state.pet.stats;
        log::info!(
            "{}: happiness {}, affection {}, hunger {} | {} coins",
            state.pet.name,
            stats.happiness,
            stats.affection,
            stats.hunger,
            state.currency
        );
    }
    log::info!("{}", game.get_pet_dialogue());

    if let Some(json) = game.export_save() {
        println!("{json}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is pixel_pet::web::init, this is just to satisfy the compiler
}
