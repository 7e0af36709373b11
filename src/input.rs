use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Command;
use crate::snake::Direction::*;

/// Maps physical keys to game commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        InputHandler
    }

    /// Returns `None` for keys the game does not use and for non-press events.
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if is_ctrl_c(&key) {
            return Some(Command::Quit);
        }

        let command = match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Turn(Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Turn(Down),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Turn(Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Turn(Right),
            KeyCode::Char(' ') | KeyCode::Enter => Command::Start,
            KeyCode::Char('p') | KeyCode::Char('P') => Command::Pause,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
            _ => return None,
        };

        Some(command)
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
