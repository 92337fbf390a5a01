use anyhow::Result;
use tracing_subscriber::EnvFilter;

use recipe_gen::client::ApiClient;
use recipe_gen::config::Config;
use recipe_gen::server;
use recipe_gen::store::RecipeStore;
use recipe_gen::tui;

#[tokio::main]
async fn main() -> Result<()> {
    // Load saved keys from .env (real env vars take precedence)
    Config::load_env_file();
    let config = Config::from_env();

    let tui_mode = std::env::args().any(|arg| arg == "--tui");

    if tui_mode {
        // The terminal belongs to ratatui, so logs go to a file.
        let log_file = std::fs::File::create("recipe-gen.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recipe_gen=info")),
            )
            .with_writer(log_file)
            .init();

        let client = ApiClient::new(&config.api_url);
        let store = RecipeStore::open_default();
        tui::run_tui(client, store).await?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recipe_gen=info")),
            )
            .init();

        server::serve(&config).await?;
    }

    Ok(())
}
