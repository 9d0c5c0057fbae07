mod api_client;
mod app;
mod command;
mod ui;
mod views;
mod widgets;

use std::io::{self, BufRead, Write as _};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use sd_core::config::Config;

use crate::api_client::Snapshot;
use crate::app::App;

fn main() -> Result<()> {
    // Parse CLI args (simple, no clap dependency).
    let args: Vec<String> = std::env::args().collect();
    let offline = args.iter().any(|a| a == "--offline");
    let headless = args.iter().any(|a| a == "--headless");
    let api_override = args
        .iter()
        .position(|a| a == "--api")
        .and_then(|i| args.get(i + 1))
        .cloned();
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .cloned();

    let mut config = match config_path {
        Some(path) => Config::load_from(&path).unwrap_or_else(|err| {
            eprintln!("warning: could not read {path}: {err}; using defaults");
            Config::default()
        }),
        None => Config::load().unwrap_or_else(|err| {
            eprintln!("warning: could not read config: {err}; using defaults");
            Config::default()
        }),
    };
    if let Some(url) = api_override {
        config.backend.url = url;
    }

    if headless {
        sd_telemetry::logging::init_logging("sd-tui", "warn");
        return run_headless(config, offline);
    }

    // The interactive UI owns stdout and stderr, so logs go to a file.
    let log_path = Config::data_dir().join("sd-tui.log");
    sd_telemetry::logging::init_logging_file("sd-tui", "warn", &log_path);

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(config, offline);

    restore_terminal()?;
    result
}

/// Spawn the background refresh thread, returns a receiver channel.
fn spawn_refresh(config: &Config, offline: bool) -> Option<flume::Receiver<Snapshot>> {
    if offline || !config.backend.enabled() {
        return None;
    }
    let (tx, rx) = flume::unbounded::<Snapshot>();
    let base = config.backend.resolved_url();
    let key = config.backend.resolved_key();
    let every = Duration::from_secs(config.backend.refresh_secs.max(1));
    std::thread::spawn(move || {
        let client = api_client::ApiClient::new(&base, &key);
        loop {
            if tx.send(client.fetch_snapshot()).is_err() {
                break;
            }
            std::thread::sleep(every);
        }
    });
    Some(rx)
}

/// Run the interactive TUI with the standard crossterm backend.
fn run(config: Config, offline: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let poll_every = Duration::from_millis(config.ui.tick_ms.max(50));
    let snapshot_rx = spawn_refresh(&config, offline);
    let mut app = App::new(config, offline);

    loop {
        if let Some(ref rx) = snapshot_rx {
            while let Ok(snapshot) = rx.try_recv() {
                app.apply_snapshot(snapshot);
            }
        }
        app.tick(Instant::now());

        terminal.draw(|frame| {
            ui::render(frame, &app);
        })?;

        if ct_event::poll(poll_every)? {
            if let Event::Key(key) = ct_event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Headless mode: reads commands from stdin, writes JSON lines to stdout.
/// No terminal involved, so scripted sessions drive the same state machine
/// the interactive UI uses.
///
/// Usage: `echo ':state' | sd-tui --headless --offline`
fn run_headless(config: Config, offline: bool) -> Result<()> {
    let snapshot_rx = spawn_refresh(&config, offline);
    let mut app = App::new(config, offline);

    emit_event(&serde_json::json!({
        "event": "started",
        "views": app::View::TAB_COUNT,
        "backend": app.backend_enabled,
    }));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        // Drain pending snapshots before processing the command.
        if let Some(ref rx) = snapshot_rx {
            while let Ok(snapshot) = rx.try_recv() {
                app.apply_snapshot(snapshot);
                emit_event(&serde_json::json!({
                    "event": "data_refreshed",
                    "tickets": app.store.len(),
                    "connected": app.api_connected,
                }));
            }
        }

        // JSON form first, then the `:verb` form.
        let cmd = command::parse_json_command(&line).or_else(|| command::parse_command(&line));

        match cmd {
            Some(cmd) => {
                let prev_view = app.view.clone();
                let result = command::execute_command(&mut app, cmd);

                if app.view != prev_view {
                    emit_event(&serde_json::json!({
                        "event": "view_changed",
                        "view": app.view.name(),
                    }));
                }

                if let Some(payload) = result {
                    // Query output is already JSON.
                    println!("{payload}");
                    let _ = io::stdout().flush();
                } else {
                    emit_event(&serde_json::json!({"event": "ok"}));
                }
            }
            None => {
                emit_event(&serde_json::json!({
                    "event": "error",
                    "message": format!("unknown command: {line}"),
                }));
            }
        }

        // Alerts surface as events rather than blocking a modal nobody sees.
        if let Some(alert) = app.alert.take() {
            emit_event(&serde_json::json!({
                "event": "alert",
                "title": alert.title,
                "message": alert.message,
            }));
        }

        if app.should_quit {
            emit_event(&serde_json::json!({"event": "quit"}));
            break;
        }
    }

    Ok(())
}

fn emit_event(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string(value) {
        println!("{s}");
        let _ = io::stdout().flush();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
