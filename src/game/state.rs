use super::{Board, Player, Seat};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Where a piece landed and what the move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub seat: Seat,
    pub status: GameStatus,
}

/// One game: the board, both players, whose turn it is, and the outcome.
///
/// The board is only ever mutated by [`Game::drop_piece`], and once the
/// status is terminal nothing changes any more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: Seat,
    status: GameStatus,
    last_move: Option<Placement>,
}

impl Game {
    /// Create a game on an empty `width` x `height` board; `player1` moves first.
    pub fn new(
        width: usize,
        height: usize,
        player1: Player,
        player2: Player,
    ) -> Result<Self, GameError> {
        Ok(Game {
            board: Board::new(width, height)?,
            players: [player1, player2],
            current: Seat::First,
            status: GameStatus::InProgress,
            last_move: None,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Seat that moves next (or moved last, once the game is over)
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    /// Lowest empty row in a column, or `None` if the column is full
    pub fn lowest_open_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.board.lowest_open_row(column)
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.open_columns()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A rejected move leaves the game untouched. A move that wins and fills
    /// the board at the same time is a win, not a tie.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let seat = self.current;
        let row = self.board.drop_piece(column, seat)?;

        self.status = if self.board.check_win(seat) {
            GameStatus::Won(seat)
        } else if self.board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        };

        if !self.is_terminal() {
            self.current = seat.other();
        }

        let placement = Placement {
            row,
            column,
            seat,
            status: self.status,
        };
        self.last_move = Some(placement);
        Ok(placement)
    }

    /// Check if `seat` has four in a row
    pub fn check_win(&self, seat: Seat) -> bool {
        self.board.check_win(seat)
    }

    /// Board is full and the last move did not win
    pub fn check_tie(&self) -> bool {
        let last_won = self
            .last_move
            .is_some_and(|placement| self.board.check_win(placement.seat));
        self.board.is_full() && !last_won
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn new_game(width: usize, height: usize) -> Game {
        Game::new(width, height, Player::human("red"), Player::human("yellow")).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = new_game(7, 6);
        assert_eq!(game.current_seat(), Seat::First);
        assert_eq!(game.current_player().color(), "red");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.legal_columns().len(), 7);
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Game::new(3, 3, Player::human("red"), Player::human("blue")).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidDimensions {
                width: 3,
                height: 3
            }
        );
    }

    #[test]
    fn test_drop_piece_switches_turn() {
        let mut game = new_game(7, 6);
        let placement = game.drop_piece(3).unwrap();

        assert_eq!(
            placement,
            Placement {
                row: 5,
                column: 3,
                seat: Seat::First,
                status: GameStatus::InProgress,
            }
        );
        assert_eq!(game.current_seat(), Seat::Second);
        assert_eq!(game.board().get(5, 3), Cell::Taken(Seat::First));
        assert_eq!(game.last_move(), Some(placement));
    }

    #[test]
    fn test_invalid_column_does_not_mutate() {
        let mut game = new_game(7, 6);
        let before = game.clone();
        assert_eq!(
            game.drop_piece(7),
            Err(GameError::InvalidColumn {
                column: 7,
                width: 7
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_column_full_does_not_mutate() {
        let mut game = new_game(7, 6);
        for _ in 0..6 {
            game.drop_piece(0).unwrap();
        }
        let before = game.clone();
        assert_eq!(game.drop_piece(0), Err(GameError::ColumnFull(0)));
        assert_eq!(game, before);
        assert_eq!(game.current_seat(), Seat::First);
    }

    #[test]
    fn test_win_detection() {
        let mut game = new_game(7, 6);

        // First seat builds along the bottom row, second stacks on top
        for col in 0..4 {
            game.drop_piece(col).unwrap();
            if col < 3 {
                game.drop_piece(col).unwrap();
            }
        }

        assert_eq!(game.status(), GameStatus::Won(Seat::First));
        assert!(game.check_win(Seat::First));
        assert!(!game.check_tie());
        // Turn is frozen on the winner
        assert_eq!(game.current_seat(), Seat::First);
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_drop_after_game_over() {
        let mut game = new_game(7, 6);
        for col in 0..4 {
            game.drop_piece(col).unwrap();
            if col < 3 {
                game.drop_piece(col).unwrap();
            }
        }
        let before = game.clone();
        assert_eq!(game.drop_piece(5), Err(GameError::GameAlreadyOver));
        assert_eq!(game, before);
    }

    /// Column order that fills a 4x4 board without anyone making four in a row.
    ///
    /// Resulting rows, top to bottom (F = first seat, S = second seat):
    /// `S F S F` / `S F S F` / `F S F S` / `F S F S`
    const TIE_4X4: [usize; 16] = [0, 1, 0, 1, 1, 0, 1, 0, 2, 3, 2, 3, 3, 2, 3, 2];

    #[test]
    fn test_tie() {
        let mut game = new_game(4, 4);
        for (i, &col) in TIE_4X4.iter().enumerate() {
            let placement = game.drop_piece(col).unwrap();
            if i + 1 < TIE_4X4.len() {
                assert_eq!(placement.status, GameStatus::InProgress, "move {i}");
            }
        }
        assert_eq!(game.status(), GameStatus::Tied);
        assert!(game.check_tie());
        assert!(!game.check_win(Seat::First));
        assert!(!game.check_win(Seat::Second));
        assert_eq!(game.drop_piece(0), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_win_on_last_cell_beats_tie() {
        // Rows, top to bottom: S S F F / S S F F / S F F S / S F S F
        // The final drop (column 0, top row) completes column 0 and the board.
        let mut game = new_game(4, 4);
        let moves = [1, 0, 1, 1, 3, 2, 2, 3, 2, 0, 3, 1, 3, 0, 2, 0];
        for &col in &moves {
            game.drop_piece(col).unwrap();
        }
        assert!(game.board().is_full());
        assert_eq!(game.status(), GameStatus::Won(Seat::Second));
        assert!(!game.check_tie());
    }
}
