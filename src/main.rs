use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use staymap::app::App;
use staymap::config::{self, ConfigResult};
use staymap::notification::NotificationKind;
use staymap::property::DatasetReader;

/// Event poll interval; also the resolution of the settle countdown
const TICK_RATE: Duration = Duration::from_millis(50);

/// Map-centric property search with a synchronized card carousel
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Property dataset (JSON). Reads stdin if not provided.
    dataset: Option<PathBuf>,

    /// Search to run on startup
    #[arg(short, long)]
    query: Option<String>,

    /// Config file to use instead of ~/.config/staymap/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_debug_logging();

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    // Read the dataset before taking over the terminal so errors print normally
    let dataset = DatasetReader::read(args.dataset.as_deref())?;
    log::debug!(
        "Loaded {} properties (location: {:?})",
        dataset.properties.len(),
        dataset.location.as_ref().and_then(|l| l.display_name())
    );

    let mut app = App::new(dataset, &config);
    if let Some(warning) = warning {
        app.notification.show(warning, NotificationKind::Warning);
    }
    if let Some(query) = &args.query {
        app.run_query(query);
    }

    let terminal = ratatui::init();
    let result = with_cleanup(
        || {
            execute!(std::io::stdout(), EnableMouseCapture)?;
            run(terminal, &mut app)
        },
        restore_terminal,
    );

    app.teardown();
    result
}

/// Run `session`, then `cleanup` whether or not the session failed
fn with_cleanup<T>(session: impl FnOnce() -> Result<T>, cleanup: impl FnOnce()) -> Result<T> {
    let result = session();
    cleanup();
    result
}

fn restore_terminal() {
    if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
        log::debug!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_RATE)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file in the temp dir; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("staymap-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_cleanup_runs_when_session_fails_early() {
        let cleaned = Cell::new(false);
        let result: Result<()> = with_cleanup(
            || Err(std::io::Error::new(std::io::ErrorKind::Unsupported, "no mouse").into()),
            || cleaned.set(true),
        );

        assert!(cleaned.get());
        assert!(result.unwrap_err().to_string().contains("no mouse"));
    }

    #[test]
    fn test_cleanup_runs_after_successful_session() {
        let cleaned = Cell::new(false);
        let result = with_cleanup(|| Ok(7), || cleaned.set(true));

        assert!(cleaned.get());
        assert_eq!(result.unwrap(), 7);
    }
}
