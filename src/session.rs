//! A single game session: one [`Game`] plus whatever drives the
//! computer-controlled seat.

use crate::ai::{choose_open_column, ColumnChooser, RandomChooser};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Game, Placement, Player, Seat};

pub struct Session {
    game: Game,
    chooser: Box<dyn ColumnChooser>,
}

impl Session {
    /// Build a session from config. Player 1 is human; player 2 follows
    /// `config.opponent`.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let chooser: Box<dyn ColumnChooser> = match config.seed {
            Some(seed) => Box::new(RandomChooser::with_seed(seed)),
            None => Box::new(RandomChooser::new()),
        };
        Self::with_chooser(config, chooser)
    }

    /// Build a session whose computer seat is driven by `chooser`.
    pub fn with_chooser(
        config: &GameConfig,
        chooser: Box<dyn ColumnChooser>,
    ) -> Result<Self, GameError> {
        let game = Game::new(
            config.width,
            config.height,
            Player::human(config.player1_color.clone()),
            Player::new(config.player2_color.clone(), config.opponent),
        )?;
        Ok(Session { game, chooser })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_computer(&self, seat: Seat) -> bool {
        self.game.player(seat).is_computer()
    }

    pub fn chooser_name(&self) -> &str {
        self.chooser.name()
    }

    /// Play `column` for the seat to move, then let the computer answer
    /// straight away if it is up next.
    ///
    /// Returns every placement made, in order. If the human move is rejected
    /// nothing is played.
    pub fn play(&mut self, column: usize) -> Result<Vec<Placement>, GameError> {
        let mut placements = vec![self.game.drop_piece(column)?];
        placements.extend(self.play_computer_turn()?);
        Ok(placements)
    }

    /// Play the computer's move if it is the computer's turn and the game is
    /// still running.
    pub fn play_computer_turn(&mut self) -> Result<Option<Placement>, GameError> {
        if self.game.is_terminal() || !self.is_computer(self.game.current_seat()) {
            return Ok(None);
        }
        let Some(column) = choose_open_column(self.chooser.as_mut(), self.game.board()) else {
            return Ok(None);
        };
        self.game.drop_piece(column).map(Some)
    }

    /// Throw the board away and start over with the same players.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.game = Game::new(
            self.game.width(),
            self.game.height(),
            self.game.player(Seat::First).clone(),
            self.game.player(Seat::Second).clone(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Cell, GameStatus, PlayerKind};

    /// Picks the leftmost open column.
    struct Leftmost;

    impl ColumnChooser for Leftmost {
        fn choose_column(&mut self, board: &Board) -> usize {
            board.open_columns().first().copied().unwrap_or(0)
        }

        fn name(&self) -> &str {
            "Leftmost"
        }
    }

    fn config(opponent: PlayerKind) -> GameConfig {
        GameConfig {
            opponent,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_computer_answers_immediately() {
        let mut session =
            Session::with_chooser(&config(PlayerKind::Computer), Box::new(Leftmost)).unwrap();

        let placements = session.play(3).unwrap();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].seat, Seat::First);
        assert_eq!((placements[0].row, placements[0].column), (5, 3));
        assert_eq!(placements[1].seat, Seat::Second);
        assert_eq!((placements[1].row, placements[1].column), (5, 0));
        assert_eq!(session.game().current_seat(), Seat::First);
        assert_eq!(session.chooser_name(), "Leftmost");
    }

    #[test]
    fn test_human_opponent_waits() {
        let mut session =
            Session::with_chooser(&config(PlayerKind::Human), Box::new(Leftmost)).unwrap();

        let placements = session.play(3).unwrap();
        assert_eq!(placements.len(), 1);
        assert_eq!(session.game().current_seat(), Seat::Second);
        assert!(!session.is_computer(Seat::Second));

        let placements = session.play(3).unwrap();
        assert_eq!(placements[0].seat, Seat::Second);
        assert_eq!(placements[0].row, 4);
    }

    #[test]
    fn test_rejected_move_skips_computer() {
        let mut session =
            Session::with_chooser(&config(PlayerKind::Computer), Box::new(Leftmost)).unwrap();
        let before = session.game().clone();
        assert_eq!(
            session.play(42),
            Err(GameError::InvalidColumn {
                column: 42,
                width: 7
            })
        );
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_computer_does_not_move_after_human_wins() {
        let mut session =
            Session::with_chooser(&config(PlayerKind::Computer), Box::new(Leftmost)).unwrap();

        // Computer always answers in column 0; human builds the bottom row from column 1
        for col in 1..4 {
            assert_eq!(session.play(col).unwrap().len(), 2);
        }
        let placements = session.play(4).unwrap();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].status, GameStatus::Won(Seat::First));
        assert_eq!(session.play(5), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let mut cfg = config(PlayerKind::Computer);
        cfg.seed = Some(1234);
        let mut a = Session::new(&cfg).unwrap();
        let mut b = Session::new(&cfg).unwrap();
        for col in [3, 3, 2, 4] {
            let placed = a.play(col).unwrap();
            assert_eq!(b.play(col).unwrap(), placed);
        }
        assert_eq!(a.game(), b.game());
    }

    #[test]
    fn test_restart_clears_board() {
        let mut session =
            Session::with_chooser(&config(PlayerKind::Computer), Box::new(Leftmost)).unwrap();
        session.play(2).unwrap();
        session.restart().unwrap();

        let game = session.game();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_seat(), Seat::First);
        assert_eq!(game.board().get(5, 2), Cell::Empty);
        assert!(session.is_computer(Seat::Second));
    }

    #[test]
    fn test_invalid_config_dimensions() {
        let cfg = GameConfig {
            width: 2,
            ..GameConfig::default()
        };
        assert!(matches!(
            Session::new(&cfg),
            Err(GameError::InvalidDimensions { width: 2, .. })
        ));
    }
}
