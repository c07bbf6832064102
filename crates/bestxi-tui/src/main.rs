// Best XI entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load the lineup payload (feed or local file)
// 4. Run the first assignment
// 5. Hand over to the TUI until the user quits

use bestxi_tui::app::LineupState;
use bestxi_tui::config;
use bestxi_tui::feed;
use bestxi_tui::tui;

use anyhow::Context;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("bestxi starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: league={}, competition={}, team={}, policy={:?}",
        config.source.league,
        config.source.competition_id,
        config.source.team_id,
        config.fill_policy
    );

    let data = feed::load(&config.source)
        .await
        .context("failed to load lineup data")?;
    info!(
        "Loaded {} modules, {} bench players",
        data.modules.len(),
        data.bench().len()
    );

    let state = LineupState::from_config(data, &config);

    if let Err(e) = tui::run(state).await {
        error!("TUI error: {}", e);
        return Err(e);
    }

    info!("bestxi shut down");
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("bestxi.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bestxi_tui=info,bestxi_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
