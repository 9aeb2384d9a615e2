//! Core Connect Four game logic: board representation, players and seats,
//! and the game state machine.

mod board;
mod player;
mod state;

pub use board::{
    Board, Cell, Direction, Run, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_SIDE, RUN_LENGTH,
};
pub use player::{Player, PlayerKind, Seat};
pub use state::{Game, GameStatus, Placement};
