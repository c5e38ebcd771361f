//! Keyboard-style input: maps key presses and releases to control inputs.
//!
//! Keys follow the classic layout: A/D turn, W/S thrust, Y fires.
//! On stdin, a bare letter is a press and `-` before a letter is a
//! release, e.g. `w d` then later `-d`. `q` shuts the loop down.

use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tracing::debug;

use asteroids_core::commands::ControlInput;

use crate::state::GameLoopCommand;

/// Control input for a key press (`pressed`) or release.
pub fn key_input(key: char, pressed: bool) -> Option<ControlInput> {
    let input = match (key.to_ascii_lowercase(), pressed) {
        ('d', true) => ControlInput::TurnRight,
        ('a', true) => ControlInput::TurnLeft,
        ('d' | 'a', false) => ControlInput::StopTurning,
        ('w', true) => ControlInput::ThrustForward,
        ('s', true) => ControlInput::ThrustReverse,
        ('w' | 's', false) => ControlInput::StopThrust,
        ('y', true) => ControlInput::Fire,
        _ => return None,
    };
    Some(input)
}

/// Parse one line of whitespace-separated key tokens.
pub fn parse_line(line: &str) -> Vec<GameLoopCommand> {
    let mut commands = Vec::new();
    for token in line.split_whitespace() {
        let (pressed, key) = match token.strip_prefix('-') {
            Some(rest) => (false, rest),
            None => (true, token),
        };

        let mut chars = key.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            debug!(token, "ignoring unknown input");
            continue;
        };

        if key.eq_ignore_ascii_case(&'q') {
            commands.push(GameLoopCommand::Shutdown);
        } else if let Some(input) = key_input(key, pressed) {
            commands.push(GameLoopCommand::Input(input));
        } else {
            debug!(token, "ignoring unmapped key");
        }
    }
    commands
}

/// Read stdin on a background thread and forward parsed commands.
///
/// The thread exits at end of input or once the game loop has gone away.
pub fn spawn_stdin_reader(cmd_tx: Sender<GameLoopCommand>) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("asteroids-input".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                for command in parse_line(&line) {
                    if cmd_tx.send(command).is_err() {
                        return;
                    }
                }
            }
        })
}
