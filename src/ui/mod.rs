//! Terminal front-end: draws the board and feeds key presses into a
//! [`crate::session::Session`].

mod app;
mod game_view;

pub use app::App;
