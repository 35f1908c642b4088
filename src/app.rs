use std::time::{Duration, Instant};

use ratatui::symbols::Marker;

use crate::config::Config;
use crate::core::{parse_command, Action, NotifyLevel};
use crate::data::Dataset;
use crate::modules::dashboard::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Top-level UI state: the dashboard module plus the shell around it
/// (command bar, transient status, help popup).
pub struct App {
    pub dashboard: Dashboard,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    pub marker: Marker,
    pub tick_rate: Duration,
    pending_copy: Option<String>,
}

fn marker_from_name(name: &str) -> Option<Marker> {
    match name.to_ascii_lowercase().as_str() {
        "braille" => Some(Marker::Braille),
        "dot" => Some(Marker::Dot),
        "block" => Some(Marker::Block),
        _ => None,
    }
}

impl App {
    pub fn new(dataset: Dataset, config: &Config, year_override: Option<i32>) -> Self {
        let initial_year = year_override.or(config.initial_year);
        let marker = config
            .marker
            .as_deref()
            .and_then(marker_from_name)
            .unwrap_or(Marker::Braille);

        let mut app = Self {
            dashboard: Dashboard::new(dataset, initial_year),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            help_open: false,
            should_quit: false,
            marker,
            tick_rate: Duration::from_millis(config.tick_ms.unwrap_or(200)),
            pending_copy: None,
        };

        if let Some(name) = config.marker.as_deref() {
            if marker_from_name(name).is_none() {
                app.set_status(
                    format!("Unknown marker '{name}', using braille"),
                    StatusLevel::Warn,
                );
            }
        }

        app
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = parse_command(&input);
        let action = self.dashboard.execute(&cmd);
        self.apply_action(action);
        self.command.last = Some(input);
        self.exit_command();
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Copy(text) => self.pending_copy = Some(text),
            Action::Notify(msg, level) => {
                let level = match level {
                    NotifyLevel::Info => StatusLevel::Info,
                    NotifyLevel::Warn => StatusLevel::Warn,
                };
                self.set_status(msg, level);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Dataset::builtin().unwrap(), &Config::default(), None)
    }

    #[test]
    fn test_marker_names() {
        assert_eq!(marker_from_name("Braille"), Some(Marker::Braille));
        assert_eq!(marker_from_name("dot"), Some(Marker::Dot));
        assert_eq!(marker_from_name("block"), Some(Marker::Block));
        assert_eq!(marker_from_name("sparkles"), None);
    }

    #[test]
    fn test_unknown_marker_warns_and_falls_back() {
        let config = Config {
            marker: Some("sparkles".to_string()),
            ..Config::default()
        };
        let app = App::new(Dataset::builtin().unwrap(), &config, None);
        assert_eq!(app.marker, Marker::Braille);
        let (text, level) = app.status_text().unwrap();
        assert!(text.contains("sparkles"));
        assert_eq!(level, StatusLevel::Warn);
    }

    #[test]
    fn test_command_round_trip_sets_year() {
        let mut app = app();
        app.enter_command();
        assert_eq!(app.input_mode, InputMode::Command);
        for ch in "year 1950".chars() {
            app.command.input.push(ch);
        }
        app.apply_command();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.dashboard.selected_year(), 1950);
        assert_eq!(app.command.last.as_deref(), Some("year 1950"));
        let (text, level) = app.status_text().unwrap();
        assert_eq!(text, "Year set to 1950");
        assert_eq!(level, StatusLevel::Info);
    }

    #[test]
    fn test_empty_command_is_a_no_op() {
        let mut app = app();
        app.enter_command();
        app.apply_command();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.command.last, None);
        assert!(app.status_text().is_none());
    }

    #[test]
    fn test_copy_command_stages_summary() {
        let mut app = app();
        app.enter_command();
        app.command.input.push_str("copy");
        app.apply_command();

        let copied = app.take_copy_request().unwrap();
        assert!(copied.starts_with("Year 2020"));
        assert_eq!(app.take_copy_request(), None);
    }

    #[test]
    fn test_quit_command_sets_flag() {
        let mut app = app();
        app.enter_command();
        app.command.input.push_str("quit");
        app.apply_command();
        assert!(app.should_quit);
    }

    #[test]
    fn test_status_survives_immediate_tick() {
        let mut app = app();
        app.set_status("hello", StatusLevel::Info);
        app.on_tick();
        assert!(app.status_text().is_some());
    }
}
