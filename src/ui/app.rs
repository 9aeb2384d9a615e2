use crate::error::GameError;
use crate::game::{GameStatus, Placement};
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: Session,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let selected_column = session.game().width() / 2; // Start in middle
        App {
            session,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.game().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.message = Some(match self.session.restart() {
            Ok(()) => "New game started!".to_string(),
            Err(err) => format!("Could not restart: {err}"),
        });
        self.selected_column = self.session.game().width() / 2;
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.session.play(self.selected_column) {
            Ok(placements) => {
                self.message = placements.last().and_then(|p| self.end_message(p));
            }
            Err(GameError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(GameError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn end_message(&self, placement: &Placement) -> Option<String> {
        match placement.status {
            GameStatus::InProgress => None,
            GameStatus::Won(seat) => Some(format!(
                "{} player won!",
                self.session.game().player(seat).color()
            )),
            GameStatus::Tied => Some("Tie!".to_string()),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}
