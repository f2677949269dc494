mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod ui;

use app::{App, Screen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datasources::{load_dataset, ForecastApiClient};
use error::{CropCastError, Result};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{
    CorrelationsScreen, DataScreen, ForecastScreen, OverviewScreen, TrendsScreen,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Subcommands run without the TUI
    match cli.command {
        Some(Commands::Init) => {
            let (_, path) = Config::setup_interactive()?;
            println!("Run `cropcast` to start the dashboard (config: {}).", path.display());
            return Ok(());
        }
        Some(Commands::Check) => {
            return run_check(cli.config, cli.data.as_deref()).await;
        }
        None => {}
    }

    // Load configuration, offering interactive setup on first run
    let config = if Config::exists(cli.config.as_ref()) {
        match Config::load(cli.config.clone()) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                eprintln!("Run `cropcast init` to recreate the configuration.");
                std::process::exit(1);
            }
        }
    } else {
        let (config, _) = Config::setup_interactive()?;
        config
    };

    // Create app
    let mut app = App::new(config.clone());

    // Load the historical dataset
    let dataset_path = cli
        .data
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| config.dataset.path.clone());
    match load_dataset(&dataset_path) {
        Ok(dataset) => {
            app.set_status(&format!("Loaded {} records", dataset.len()));
            app.set_dataset(dataset);
        }
        Err(e) => {
            tracing::warn!("Failed to load dataset: {}", e);
            app.set_dataset_error(e.to_string());
            app.set_status("Dataset load failed - see Overview");
        }
    }

    // Create forecast client and do the initial fetch
    let forecast_client = if config.forecast.enabled {
        Some(ForecastApiClient::new(config.forecast.clone()))
    } else {
        tracing::info!("Forecast API disabled - recommendations will be unavailable");
        None
    };

    if let Some(ref client) = forecast_client {
        fetch_forecast(client, &mut app).await;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, forecast_client.as_ref()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Validate config, dataset, and forecast API connectivity.
async fn run_check(
    config_override: Option<std::path::PathBuf>,
    data_override: Option<&std::path::Path>,
) -> Result<()> {
    let config = Config::load(config_override)?;
    println!("Config: OK");

    let dataset_path = data_override
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| config.dataset.path.clone());
    match load_dataset(&dataset_path) {
        Ok(dataset) => println!("Dataset: OK ({} records from {})", dataset.len(), dataset_path),
        Err(e) => println!("Dataset: FAILED ({})", e),
    }

    if config.forecast.enabled {
        let client = ForecastApiClient::new(config.forecast.clone());
        match client.test_connection().await {
            Ok(true) => println!("Forecast API: OK ({})", config.forecast.base_url),
            Ok(false) => println!("Forecast API: FAILED (non-success status)"),
            Err(e) => println!("Forecast API: FAILED ({})", e),
        }
    } else {
        println!("Forecast API: disabled");
    }

    Ok(())
}

async fn fetch_forecast(client: &ForecastApiClient, app: &mut App) {
    match client.fetch_forecast().await {
        Ok(forecast) => {
            app.update_forecast(forecast);
            app.set_status("Forecast updated");
        }
        Err(e) => {
            tracing::warn!("Failed to fetch forecast: {}", e);
            app.set_forecast_error(e.to_string());
            app.set_status("Forecast fetch failed - see Forecast screen");
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    forecast_client: Option<&ForecastApiClient>,
) -> Result<()>
where
    CropCastError: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        // Draw UI
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Overview => {
                    let screen = OverviewScreen::new(
                        app.dataset.as_ref(),
                        app.dataset_error.as_deref(),
                    )
                    .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Trends => {
                    let screen = TrendsScreen::new(&app.monthly);
                    f.render_widget(screen, area);
                }
                Screen::Correlations => {
                    let screen =
                        CorrelationsScreen::new(app.dataset.as_ref(), app.correlation.as_ref())
                            .with_axes(
                                app.correlations_state.x_column,
                                app.correlations_state.y_column,
                            );
                    f.render_widget(screen, area);
                }
                Screen::Data => {
                    let screen = DataScreen::new(app.dataset.as_ref())
                        .with_scroll(app.data_state.scroll_offset);
                    f.render_widget(screen, area);
                }
                Screen::Forecast => {
                    let screen = ForecastScreen::new(
                        &app.monthly,
                        app.forecast.as_ref(),
                        &app.recommendations,
                    )
                    .with_error(app.forecast_error.as_deref())
                    .with_selection(app.forecast_state.selected_index);
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Handle input with timeout for async operations
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        app.quit();
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Esc => {
                        app.switch_screen(Screen::Overview);
                    }
                    KeyCode::Char(c) => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => {
                        handle_screen_input(app, key.code);
                    }
                }
            }
        }

        // Handle refresh request
        if app.needs_refresh {
            app.needs_refresh = false;
            app.refreshing = true;
            match forecast_client {
                Some(client) => fetch_forecast(client, app).await,
                None => app.set_status("Forecast API disabled in config"),
            }
            app.refreshing = false;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Overview => handle_overview_input(app, code),
        Screen::Trends => {}
        Screen::Correlations => handle_correlations_input(app, code),
        Screen::Data => handle_data_input(app, code),
        Screen::Forecast => handle_forecast_input(app, code),
    }
}

fn handle_overview_input(app: &mut App, code: KeyCode) {
    if let KeyCode::Char('r') = code {
        app.request_refresh();
    }
}

fn handle_correlations_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('x') => app.correlations_state.cycle_x(),
        KeyCode::Char('y') => app.correlations_state.cycle_y(),
        _ => {}
    }
}

fn handle_data_input(app: &mut App, code: KeyCode) {
    let count = app.record_count();
    match code {
        KeyCode::Up => app.data_state.scroll_up(1),
        KeyCode::Down => app.data_state.scroll_down(1, count),
        KeyCode::PageUp => app.data_state.scroll_up(20),
        KeyCode::PageDown => app.data_state.scroll_down(20, count),
        _ => {}
    }
}

fn handle_forecast_input(app: &mut App, code: KeyCode) {
    let count = app.recommendations.len();
    match code {
        KeyCode::Up => app.forecast_state.prev(),
        KeyCode::Down => app.forecast_state.next(count),
        KeyCode::Char('r') => app.request_refresh(),
        _ => {}
    }
}
