use flashcards_app::{App, Config};
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let config = Config::default();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(decks_dir = %config.decks_dir.display(), "starting flashcards");

    let stdin = io::stdin();
    let mut app = App::new(&config, stdin.lock(), io::stdout());
    if let Err(e) = app.run() {
        tracing::error!("flashcards stopped: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
