//! # Game Core Module
//!
//! Everything needed to play one run of the maze.
//!
//! ## Components
//!
//! - [`entity`] - Characters, monsters and potions with their combat arithmetic
//! - [`maze`] - Grid generation, rendering and movement validation
//! - [`console`] - Keyboard input and screen output behind the [`console::Console`] trait
//! - [`session`] - The play loop and its Playing/Won/Quit state machine
//! - [`errors`] - Error type shared by the above
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  GameSession    │ ← Owns the maze and the player, drives the loop
//! └─────────────────┘
//!     │         │
//! ┌────────┐ ┌────────┐
//! │  Maze  │ │ Entity │ ← Independent leaves
//! └────────┘ └────────┘
//! ```
//!
//! The session never touches the terminal directly; it is handed a [`console::Console`]
//! so the same loop runs against a real TTY or a scripted key list.

pub mod console;
pub mod entity;
pub mod errors;
pub mod maze;
pub mod session;

pub use errors::GameError;
pub use session::{GameSession, SessionState};
