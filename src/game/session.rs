use log::{debug, info};

use super::console::{Console, Input};
use super::entity::Entity;
use super::errors::GameError;
use super::maze::{Maze, MoveOutcome};

pub const MOVE_PROMPT: &str = "Move with W/A/S/D or press Q to quit";
pub const WIN_TEXT: &str = "You reached the exit! You win!";
pub const GAME_OVER_TEXT: &str = "Game Over.";

/// # Maze Session
///
/// Owns the maze and the player for one run and drives them from console input.
///
/// ## States
///
/// 1. **Playing** - waiting for the next key
/// 2. **Won** - the player stepped onto the exit
/// 3. **Quit** - the player pressed Q (or Esc)
///
/// `Won` and `Quit` are terminal: once reached, further input is ignored.
///
/// ## Usage
///
/// ```rust
/// use mazecrawl::game::console::ScriptedConsole;
/// use mazecrawl::game::entity::Entity;
/// use mazecrawl::game::maze::Maze;
/// use mazecrawl::game::session::{GameSession, SessionState};
///
/// let maze = Maze::from_seed(10, 25, 42).unwrap();
/// let mut session = GameSession::new(Entity::character("Player", 100, 15), maze);
/// // Seven steps down the left corridor, eight along the bottom one
/// let keys = format!("x{}{}", "s".repeat(7), "d".repeat(8));
/// let mut console = ScriptedConsole::from_keys(&keys);
/// assert_eq!(session.run(&mut console).unwrap(), SessionState::Won);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Won,
    Quit,
}

#[derive(Debug)]
pub struct GameSession {
    player: Entity,
    maze: Maze,
    state: SessionState,
    turns: u32,
}

impl GameSession {
    pub fn new(player: Entity, maze: Maze) -> Self {
        GameSession {
            player,
            maze,
            state: SessionState::Playing,
            turns: 0,
        }
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of inputs applied while playing, blocked moves included.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Apply one input. Has no effect once the session has ended.
    pub fn step(&mut self, input: Input) -> SessionState {
        if self.state != SessionState::Playing {
            return self.state;
        }
        self.turns = self.turns.saturating_add(1);
        match input {
            Input::Quit => {
                info!("Player quit after {} turns", self.turns);
                self.state = SessionState::Quit;
            }
            Input::Move(dir) => {
                if self.maze.move_player(dir) == MoveOutcome::ReachedExit {
                    let p = self.maze.player();
                    info!(
                        "{} reached the exit at {},{} in {} turns",
                        self.player.name, p.row, p.col, self.turns
                    );
                    self.state = SessionState::Won;
                }
            }
            Input::Other => debug!("Ignoring unmapped key"),
        }
        self.state
    }

    fn frame(&self) -> String {
        format!("{}\n{}\n", self.maze.render(), MOVE_PROMPT)
    }

    /// Play to completion: banner, any-key gate, the move loop, and the closing screen.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<SessionState, GameError> {
        console.print(&format!(
            "Game Starting...\n\n{}\nPress any key to enter the maze...\n",
            self.player.health_bar()
        ))?;
        console.read_input()?;

        while self.state == SessionState::Playing {
            console.redraw(&self.frame())?;
            let input = console.read_input()?;
            if self.step(input) == SessionState::Won {
                console.redraw(&self.maze.render())?;
                console.print(&format!("\n{}\n", WIN_TEXT))?;
            }
        }

        console.print(&format!("\n{}\n", GAME_OVER_TEXT))?;
        console.read_input()?;
        Ok(self.state)
    }
}
