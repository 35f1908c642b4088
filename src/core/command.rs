//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Jump the selection to a year (clamped into the dataset span)
    Year(i32),

    /// Activate a tab by key. The key is passed through unvalidated;
    /// an unregistered key leaves the panel area empty.
    Tab(String),

    /// Copy the current-year summary to the clipboard
    Copy,

    /// Quit the app
    Quit,

    /// Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim().to_string());

    match cmd.to_lowercase().as_str() {
        "year" | "yr" => match args.and_then(|s| s.parse::<i32>().ok()) {
            Some(year) => Command::Year(year),
            None => Command::Unknown(input.to_string()),
        },
        "tab" | "t" => {
            if let Some(key) = args {
                Command::Tab(key)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "copy" | "cp" => Command::Copy,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}
