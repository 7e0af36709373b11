use std::{collections::VecDeque, thread::sleep, time::{Duration, Instant}};

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::GameConfig;
use crate::error::GameResult;
use crate::food;
use crate::grid::{Grid, Point};
use crate::score::HighScoreStore;
use crate::snake::{Snake, Direction::{*, self}, INITIAL_SNAKE_LENGTH};

/// Every this many points the snake speeds up by one step per second.
const SPEEDUP_EVERY: u32 = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
}

/// What the player asked for, already decoded from raw input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Quit,
    Turn(Direction),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Crash,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Plays the short audio feedback signals.
pub trait Cues {
    fn play(&mut self, cue: Cue);
}

/// Draws whichever state is active. Exactly one method is called per tick.
pub trait Presenter {
    fn render_menu(&mut self, high_score: u32) -> GameResult<()>;
    fn render_playing(
        &mut self,
        body: &VecDeque<Point>,
        food: Point,
        score: u32,
        high_score: u32,
    ) -> GameResult<()>;
    fn render_game_over(&mut self, final_score: u32) -> GameResult<()>;
}

/// Source of player commands, drained once per tick.
pub trait CommandSource {
    fn drain_commands(&mut self) -> GameResult<Vec<Command>>;
}

pub struct SnakeGame<C: Cues> {
    grid: Grid,
    base_speed: u32,
    state: GameState,
    snake: Snake,
    // Direction of the last step, and the one the next step will take
    direction: Direction,
    next_direction: Direction,
    food: Point,
    score: u32,
    high_score: u32,
    speed: u32,
    store: HighScoreStore,
    cues: C,
    rng: StdRng,
}

impl<C: Cues> SnakeGame<C> {
    pub fn new(config: &GameConfig, store: HighScoreStore, cues: C) -> Self {
        Self::with_rng(config, store, cues, StdRng::from_entropy())
    }

    pub fn with_rng(config: &GameConfig, store: HighScoreStore, cues: C, mut rng: StdRng) -> Self {
        let grid = Grid::new(config.width, config.height, config.cell_size);
        let snake = Snake::new(&grid, grid.center(), INITIAL_SNAKE_LENGTH, Right);
        let food = food::place(&mut rng, &grid, &snake);
        let base_speed = config.base_speed.max(1);
        let high_score = store.load();

        SnakeGame {
            grid,
            base_speed,
            state: GameState::Menu,
            snake,
            direction: Right,
            next_direction: Right,
            food,
            score: 0,
            high_score,
            speed: base_speed,
            store,
            cues,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.speed as u64)
    }

    /// Applies one player command to the state machine.
    pub fn handle(&mut self, command: Command) -> Flow {
        match (self.state, command) {
            (_, Command::Quit) => return Flow::Quit,
            (GameState::Menu, Command::Start) | (GameState::GameOver, Command::Start) => {
                self.reset();
                self.state = GameState::Playing;
                info!("New game started");
            }
            (GameState::Playing, Command::Pause) => {
                // The run is abandoned, its score is never recorded
                self.state = GameState::Menu;
                info!("Game abandoned with score {}", self.score);
            }
            (GameState::Playing, Command::Turn(dir)) => {
                if dir.is_opposite(self.direction) {
                    debug!("Ignoring reversal to {:?}", dir);
                } else {
                    self.next_direction = dir;
                }
            }
            _ => {}
        }

        Flow::Continue
    }

    /// Advances the simulation by one step. Does nothing outside of Playing.
    pub fn step(&mut self) -> GameResult<()> {
        if self.state != GameState::Playing {
            return Ok(());
        }

        self.direction = self.next_direction;
        let new_head = self.snake.advance(&self.grid, self.direction);

        if self.snake.self_collides(new_head) {
            return self.game_over();
        }

        let ate_food = new_head == self.food;
        self.snake.grow_or_slide(new_head, ate_food);

        if ate_food {
            self.score += 1;
            self.cues.play(Cue::Eat);
            self.food = food::place(&mut self.rng, &self.grid, &self.snake);

            if self.score % SPEEDUP_EVERY == 0 {
                self.speed += 1;
                debug!("Speed is now {} steps/s", self.speed);
            }
        }

        Ok(())
    }

    pub fn render<P: Presenter + ?Sized>(&self, presenter: &mut P) -> GameResult<()> {
        match self.state {
            GameState::Menu => presenter.render_menu(self.high_score),
            GameState::Playing => {
                presenter.render_playing(self.snake.body(), self.food, self.score, self.high_score)
            }
            GameState::GameOver => presenter.render_game_over(self.score),
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn reset(&mut self) {
        self.direction = Right;
        self.next_direction = Right;
        self.snake = Snake::new(&self.grid, self.grid.center(), INITIAL_SNAKE_LENGTH, Right);
        self.food = food::place(&mut self.rng, &self.grid, &self.snake);
        self.score = 0;
        self.speed = self.base_speed;
    }

    fn game_over(&mut self) -> GameResult<()> {
        self.state = GameState::GameOver;
        self.cues.play(Cue::Crash);
        info!("Game over with score {} and length {}", self.score, self.snake.len());

        if self.score > self.high_score {
            self.high_score = self.score;
            info!("New high score: {}", self.score);
            self.store.save(self.score)?;
        }

        Ok(())
    }
}

/// Runs the tick loop until the player quits.
pub fn run<C, T>(game: &mut SnakeGame<C>, term: &mut T) -> GameResult<()>
where
    C: Cues,
    T: Presenter + CommandSource,
{
    let mut next_tick = Instant::now();

    loop {
        for command in term.drain_commands()? {
            if game.handle(command) == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }

        game.step()?;
        game.render(term)?;

        // Recomputed every tick, speed may have changed
        next_tick += game.tick_interval();
        let now = Instant::now();
        if next_tick > now {
            sleep(next_tick - now);
        } else {
            next_tick = now;
        }
    }
}
