use std::{collections::VecDeque, io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};
use log::warn;

use crate::config::{COLS_PER_CELL, HEADER_ROWS};
use crate::error::GameResult;
use crate::game::{Command, CommandSource, Cue, Cues, Presenter};
use crate::grid::{Grid, Point};
use crate::input::InputHandler;

const SNAKE_HEAD: &str = "▓▓";
const SNAKE_BODY: &str = "██";
const FOOD: &str = "()";

/// Terminal-backed presentation. Frames are drawn into a back buffer and only
/// the characters that changed since the last frame are written out.
pub struct TermManager {
    width: u16,
    height: u16,
    stdout: Stdout,
    grid: Grid,
    screen: Vec<char>,
    frame: Vec<char>,
    input: InputHandler,
}

impl TermManager {
    pub fn new(grid: Grid) -> GameResult<Self> {
        let (width, height) = terminal::size()?;
        let size = width as usize * height as usize;
        Ok(TermManager {
            width,
            height,
            stdout: stdout(),
            grid,
            screen: vec![' '; size],
            frame: vec![' '; size],
            input: InputHandler::new(),
        })
    }

    pub fn setup(&mut self) -> GameResult<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.clear()
    }

    pub fn restore(&mut self) -> GameResult<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn clear(&mut self) -> GameResult<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen.iter_mut().for_each(|c| *c = ' ');
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn begin_frame(&mut self) {
        self.frame.iter_mut().for_each(|c| *c = ' ');
    }

    /// Writes every changed character and makes the frame the new screen.
    fn present(&mut self) -> GameResult<()> {
        for (i, (new, old)) in self.frame.iter().zip(self.screen.iter()).enumerate() {
            if new != old {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                queue!(self.stdout, cursor::MoveTo(x, y), style::Print(*new))?;
            }
        }

        self.screen.copy_from_slice(&self.frame);
        self.stdout.flush()?;
        Ok(())
    }

    /// Clipped to the terminal.
    fn put_str(&mut self, x: u16, y: u16, s: &str) {
        if y >= self.height {
            return;
        }

        for (i, ch) in s.chars().enumerate() {
            let col = x as usize + i;
            if col >= self.width as usize {
                break;
            }
            self.frame[y as usize * self.width as usize + col] = ch;
        }
    }

    fn put_cell(&mut self, p: Point, s: &str) {
        let (cx, cy) = self.grid.cell_of(p);
        let x = 1 + cx as u16 * COLS_PER_CELL;
        let y = HEADER_ROWS + 1 + cy as u16;
        self.put_str(x, y, s);
    }

    fn draw_borders(&mut self) {
        let width = self.grid.cols() as u16 * COLS_PER_CELL + 2;
        let height = self.grid.rows() as u16 + 2;
        let (top, bottom) = (HEADER_ROWS, HEADER_ROWS + height - 1);

        for x in 0..width {
            let ch = if x == 0 || x == width - 1 {"+"} else {"-"};
            self.put_str(x, top, ch);
            self.put_str(x, bottom, ch);
        }

        for y in top + 1..bottom {
            self.put_str(0, y, "|");
            self.put_str(width - 1, y, "|");
        }
    }

    /// Centers a block of lines on the screen, inside a blank margin.
    fn show_message(&mut self, lines: &[&str]) {
        let msg_height = (lines.len() + 2) as u16;
        let msg_width = (lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2) as u16;
        let left = (self.width / 2).saturating_sub(msg_width / 2);
        let top = (self.height / 2).saturating_sub(msg_height / 2);

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.put_str(left, top + i as u16 + 1, &padded_line);
        }
    }
}

impl Presenter for TermManager {
    fn render_menu(&mut self, high_score: u32) -> GameResult<()> {
        self.begin_frame();
        self.show_message(&[
            "SNAKE GAME",
            "",
            "Press SPACE to Start",
            "Arrow keys or WASD to move, P to pause, Q to quit",
            "",
            &format!("High Score: {}", high_score),
        ]);
        self.present()
    }

    fn render_playing(
        &mut self,
        body: &VecDeque<Point>,
        food: Point,
        score: u32,
        high_score: u32,
    ) -> GameResult<()> {
        self.begin_frame();
        self.put_str(0, 0, &format!("Score: {}    High Score: {}", score, high_score));
        self.draw_borders();

        self.put_cell(food, FOOD);
        for (i, pos) in body.iter().enumerate().rev() {
            let glyph = if i == 0 {SNAKE_HEAD} else {SNAKE_BODY};
            self.put_cell(*pos, glyph);
        }

        self.present()
    }

    fn render_game_over(&mut self, final_score: u32) -> GameResult<()> {
        self.begin_frame();
        self.show_message(&[
            "GAME OVER",
            "",
            &format!("Final Score: {}", final_score),
            "",
            "Press SPACE to Play Again",
            "or Q to quit.",
        ]);
        self.present()
    }
}

impl CommandSource for TermManager {
    fn drain_commands(&mut self) -> GameResult<Vec<Command>> {
        let mut commands = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                commands.extend(self.input.handle_key_event(ev));
            }
        }

        Ok(commands)
    }
}

/// Plays cues on the terminal bell.
pub struct TermBell {
    stdout: Stdout,
}

impl TermBell {
    pub fn new() -> Self {
        TermBell { stdout: stdout() }
    }
}

impl Default for TermBell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cues for TermBell {
    fn play(&mut self, cue: Cue) {
        let bells = match cue {
            Cue::Eat => "\x07",
            Cue::Crash => "\x07\x07",
        };

        if let Err(e) = self.stdout.write_all(bells.as_bytes()).and_then(|_| self.stdout.flush()) {
            warn!("Could not play {:?} cue: {}", cue, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bell_plays_every_cue() {
        let mut bell = TermBell::default();
        bell.play(Cue::Eat);
        bell.play(Cue::Crash);
    }
}
