//! Headless session scripts.
//!
//! A script is a text file with one input event per line. Blank lines and
//! lines starting with `#` are ignored.
//!
//! ```text
//! # drag the lower handle to the middle
//! press 361 430.8
//! move 512 430.8
//! release 512 430.8
//! type 42
//! key enter
//! wait 3000
//! blur
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use popviz_ui::{Application, KeyCode, Runtime};
use thiserror::Error;

/// One scripted input event
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEvent {
    Move(f32, f32),
    Press(f32, f32),
    Release(f32, f32),
    Type(String),
    Key(KeyCode),
    Wait(Duration),
    /// The surface loses keyboard focus
    Blur,
}

/// Errors that can occur while reading a session script.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// A line could not be understood
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The script file could not be read
    #[error("Failed to read script {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn parse_error(line: usize, message: impl Into<String>) -> ScriptError {
    ScriptError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_point(line: usize, args: &str) -> Result<(f32, f32), ScriptError> {
    let mut parts = args.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(parse_error(line, format!("expected 'X Y', got '{}'", args)));
    };
    let coord = |s: &str| {
        s.parse::<f32>()
            .map_err(|_| parse_error(line, format!("invalid coordinate '{}'", s)))
    };
    Ok((coord(x)?, coord(y)?))
}

fn parse_key(line: usize, name: &str) -> Result<KeyCode, ScriptError> {
    match name.to_ascii_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "backspace" => Ok(KeyCode::Backspace),
        "delete" => Ok(KeyCode::Delete),
        "tab" => Ok(KeyCode::Tab),
        other => Err(parse_error(line, format!("unknown key '{}'", other))),
    }
}

/// Parse a whole script
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (command, args) = match trimmed.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (trimmed, ""),
        };

        let event = match command {
            "move" => {
                let (x, y) = parse_point(line, args)?;
                ScriptEvent::Move(x, y)
            }
            "press" => {
                let (x, y) = parse_point(line, args)?;
                ScriptEvent::Press(x, y)
            }
            "release" => {
                let (x, y) = parse_point(line, args)?;
                ScriptEvent::Release(x, y)
            }
            "type" if !args.is_empty() => ScriptEvent::Type(args.to_string()),
            "type" => return Err(parse_error(line, "'type' needs text")),
            "key" => ScriptEvent::Key(parse_key(line, args)?),
            "wait" => {
                let ms = args
                    .parse::<u64>()
                    .map_err(|_| parse_error(line, format!("invalid duration '{}'", args)))?;
                ScriptEvent::Wait(Duration::from_millis(ms))
            }
            "blur" => ScriptEvent::Blur,
            other => return Err(parse_error(line, format!("unknown command '{}'", other))),
        };
        events.push(event);
    }

    log::debug!("Parsed {} script events", events.len());
    Ok(events)
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&source)
}

/// Feed every event to the runtime in order.
///
/// Returns how many events produced a message.
pub fn run_script<A: Application>(runtime: &mut Runtime<A>, events: &[ScriptEvent]) -> usize {
    let mut handled = 0;
    for event in events {
        log::trace!("Script: {:?}", event);
        let produced = match event {
            ScriptEvent::Move(x, y) => runtime.mouse_move(*x, *y),
            ScriptEvent::Press(x, y) => runtime.mouse_press(*x, *y),
            ScriptEvent::Release(x, y) => runtime.mouse_release(*x, *y),
            ScriptEvent::Type(text) => runtime.text_input(text),
            ScriptEvent::Key(key) => runtime.key_press(*key),
            ScriptEvent::Wait(duration) => runtime.advance(*duration),
            ScriptEvent::Blur => runtime.focus_lost(),
        };
        if produced {
            handled += 1;
        }
    }
    handled
}
