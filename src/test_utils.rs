#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::property::{Dataset, DatasetReader};
    use crate::search::SearchState;

    pub const FIXTURE_PATH: &str = "tests/fixtures/dublin.json";

    pub fn fixture_dataset() -> Dataset {
        DatasetReader::read(Some(&PathBuf::from(FIXTURE_PATH))).unwrap()
    }

    /// App over the Dublin fixture with a live catalog search worker
    pub fn test_app() -> App {
        App::new(fixture_dataset(), &Config::default())
    }

    pub fn test_app_with_config(config: &Config) -> App {
        App::new(fixture_dataset(), config)
    }

    /// App whose search collaborator is unavailable
    pub fn test_app_without_search() -> App {
        App::with_search(fixture_dataset(), &Config::default(), SearchState::new())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Render the whole app into a test terminal and return its text
    pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    /// Wait for the in-flight search to be applied by ticking the app
    ///
    /// Returns true if the search completed, false on timeout.
    pub fn wait_for_search(app: &mut App, timeout_ms: u64) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.tick(Instant::now());
            if !app.search.is_searching() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        false
    }
}
