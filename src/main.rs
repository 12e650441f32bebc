use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use eurocast::action::Action;
use eurocast::api::{DEFAULT_HOST, WeatherClient};
use eurocast::catalog::CityCatalog;
use eurocast::runtime::App;
use eurocast::state::AppState;

/// Weather widget for European capitals.
#[derive(Parser, Debug)]
#[command(name = "eurocast")]
#[command(about = "A terminal weather widget for European capitals")]
struct Args {
    /// Preselect a city and fetch its weather on start
    #[arg(long, short)]
    city: Option<String>,

    /// Weather service base URL
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Write tracing output to this file (stderr is owned by the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let catalog = CityCatalog::european_capitals();

    // Validate --city before touching the terminal.
    let preselect = match &args.city {
        Some(name) => match catalog.index_of(name) {
            Some(index) => Some(index),
            None => {
                eprintln!("Error: '{name}' is not in the city catalog.");
                eprintln!("Available cities: {}", catalog.names().join(", "));
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut app = App::new(AppState::new(catalog), WeatherClient::new(args.host));
    if let Some(index) = preselect {
        app.enqueue(Action::CitySelect(index));
        app.enqueue(Action::WeatherFetch);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
