use anyhow::Result;
use bloom_core::config::ConfigManager;
use bloom_core::env::{get_base_dir, get_log_dir};
use bloom_core::i18n::{Language, Localizer};
use bloom_core::relay::RelayClient;
use bloom_tui::routes::Route;
use bloom_tui::{AppEvent, AppState, EventHandler, update, view};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "bloom", version, about = "Mental wellness companion")]
struct Cli {
    /// Page to open at startup, e.g. /journal or /mood-check
    #[arg(long, default_value = "/")]
    route: String,

    /// Display language (en or hi); defaults to the LANG environment
    #[arg(long)]
    lang: Option<String>,

    /// Chat backend base URL; overrides the config file
    #[arg(long)]
    backend: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_dir = get_base_dir()?;
    std::fs::create_dir_all(&base_dir)?;
    let log_dir = get_log_dir()?;
    std::fs::create_dir_all(&log_dir)?;

    flexi_logger::Logger::try_with_env_or_str("info")?
        .log_to_file(
            flexi_logger::FileSpec::default()
                .directory(&log_dir)
                .basename("bloom")
                .suffix("log"),
        )
        .format(flexi_logger::opt_format)
        .start()?;

    info!("bloom v{} starting up...", env!("CARGO_PKG_VERSION"));

    let mut config_manager = ConfigManager::new(&base_dir)?;

    let language = match cli.lang.as_deref() {
        Some("hi") => Language::Hi,
        Some(_) => Language::En,
        None => Language::from_env(),
    };

    // Chat is simulated locally unless a backend is configured somewhere.
    let backend_url = cli.backend.or_else(|| config_manager.config.backend_url.clone());
    let relay = match backend_url {
        Some(url) => Some(RelayClient::new(url)?),
        None if std::env::var("BLOOM_BACKEND_URL").is_ok() => Some(RelayClient::from_env()?),
        None => None,
    };
    match &relay {
        Some(client) => info!("chat relay: {}", client.base_url()),
        None => info!("chat relay: disabled, replies are simulated"),
    }

    let mut state = AppState::new(
        config_manager.config.clone(),
        Localizer::new(language),
        relay,
    );
    state.navigate(Route::from_path(&cli.route));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(AppState::TICK_MS));

    let run_result = run(&mut terminal, &mut state, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    // Persist theme changes made during the session
    if config_manager.config.theme_index != state.theme_index {
        config_manager.update_theme(state.theme_index)?;
    }

    info!("bloom shutting down");
    run_result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|f| view::render(f, state))?;

        match events.next()? {
            AppEvent::Input(key) => update::handle_key(state, key),
            AppEvent::Tick => state.on_tick(),
        }

        if state.should_quit {
            return Ok(());
        }
    }
}
