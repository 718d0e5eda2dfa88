//! # Mazecrawl - a tiny console maze adventure
//!
//! Mazecrawl generates a small walled grid, drops the player in the top-left corner and
//! lets them walk it one key press at a time until they find the exit or give up.
//!
//! ## Features
//!
//! - **Guaranteed Route**: Random walls, but two carved corridors always link start and exit.
//! - **Seeded Generation**: Any maze can be reproduced from its seed (`--seed` or config).
//! - **Raw Terminal Input**: W/A/S/D or arrow keys, no Enter needed; Q or Esc quits.
//! - **Combat Primitives**: Characters, monsters and potions with fixed-damage attacks.
//! - **TOML Configuration**: Player stats, maze size and wall density, logging.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mazecrawl::game::console::TerminalConsole;
//! use mazecrawl::game::entity::Entity;
//! use mazecrawl::game::maze::Maze;
//! use mazecrawl::game::GameSession;
//!
//! fn main() -> anyhow::Result<()> {
//!     let maze = Maze::from_seed(10, 25, 42)?;
//!     let mut session = GameSession::new(Entity::character("Player", 100, 15), maze);
//!     let mut console = TerminalConsole::new()?;
//!     session.run(&mut console)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - Entities, maze, console seam and the play loop
//! - [`config`] - Configuration loading and validation

pub mod config;
pub mod game;
