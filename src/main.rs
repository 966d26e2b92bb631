use setzero::{app::App, config::GameConfig, error, logging, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Logging disabled: {}", e);
    }

    if let Err(e) = run().await {
        log::error!("application error: {}", e);
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = GameConfig::load()?;
    let mut app = App::new(&config)?;
    app.init()?;
    app.run().await
}
