//! # Connect Four
//!
//! A two-player Connect Four game: a human against another human or a
//! computer that picks columns uniformly at random. Ships with a terminal UI
//! built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, state machine
//! - [`ai`] — Column choosers for computer-controlled seats
//! - [`session`] — One game plus its computer opponent
//! - [`ui`] — Terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
