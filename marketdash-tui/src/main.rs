//! marketdash — terminal market dashboard.
//!
//! Price cards up top, a filterable line chart below: trailing 7 days,
//! trailing month, a custom window, or a live rolling view fed by random
//! replay of the tick history. Filter choices, hidden series, and the
//! live chart snapshot persist across restarts.

mod app;
mod input;
mod persistence;
mod sample_data;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use marketdash_core::cards::update_cards;
use marketdash_core::data::load_ticks;
use marketdash_core::feed::ReplayFeed;
use marketdash_core::live::advance;
use marketdash_core::store::{JsonFileStore, MemStore, PrefStore};
use marketdash_core::ticker::Ticker;

use crate::app::AppState;

#[derive(Debug, Parser)]
#[command(name = "marketdash", about = "Terminal market dashboard")]
struct Args {
    /// JSON tick file; built-in sample data when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Live chart update period in milliseconds.
    #[arg(long, default_value_t = 1000)]
    chart_interval_ms: u64,

    /// Price card update period in milliseconds.
    #[arg(long, default_value_t = 6000)]
    card_interval_ms: u64,

    /// Rolling live buffer capacity in points.
    #[arg(long, default_value_t = 20)]
    max_points: usize,

    /// Seed for the live simulation (entropy when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Do not read or write the preference file.
    #[arg(long)]
    ephemeral: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut store: Box<dyn PrefStore> = if args.ephemeral {
        Box::new(MemStore::default())
    } else {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marketdash")
            .join("prefs.json");
        Box::new(JsonFileStore::open(path))
    };

    // Load the tick history; a bad file still opens the dashboard, with
    // the error shown in place of the chart.
    let mut load_error = None;
    let ticks = match &args.data {
        Some(path) => match load_ticks(path) {
            Ok(ticks) => ticks,
            Err(err) => {
                load_error = Some(err.to_string());
                Vec::new()
            }
        },
        None => sample_data::sample_ticks(),
    };

    let symbols = persistence::load_symbols(store.as_ref());
    let mut app = AppState::new(ticks, symbols, args.max_points);
    app.load_error = load_error;
    persistence::apply(&mut app, store.as_ref());
    persistence::save_symbols(&app, store.as_mut());
    app.set_status(format!("Loaded {} ticks", app.ticks.len()));

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, store.as_mut(), &mut rng, &args);

    // Final snapshot before exit.
    persistence::save_frame(&app, store.as_mut());
    persistence::save_filter(&app, store.as_mut());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    store: &mut dyn PrefStore,
    rng: &mut StdRng,
    args: &Args,
) -> Result<()> {
    let mut chart_ticker = Ticker::new(Duration::from_millis(args.chart_interval_ms));
    let mut card_ticker = Ticker::new(Duration::from_millis(args.card_interval_ms));

    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Advance the simulation when a period has elapsed.
        let now = Instant::now();
        app.expire_status(now);
        if chart_ticker.poll(now) {
            let feed = ReplayFeed::new(&app.pool);
            app.frame = advance(&app.frame, &feed, app.max_points, rng, Local::now());
            app.sync_hidden_flags();
            persistence::save_frame(app, store);
        }
        if card_ticker.poll(now) {
            let feed = ReplayFeed::new(&app.pool);
            app.cards = update_cards(&app.cards, &feed, rng);
        }

        // 3. Poll for input events (50ms timeout keeps the tickers live).
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key, store);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
