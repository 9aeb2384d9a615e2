use crate::game::Board;

/// Upper bound on redraws per open column before giving up on the chooser.
const REDRAWS_PER_COLUMN: usize = 64;

/// Anything that can pick a column for a computer-controlled seat.
pub trait ColumnChooser {
    /// Pick a column in `0..board.width()`. The column may be full; see
    /// [`choose_open_column`] for a wrapper that redraws.
    fn choose_column(&mut self, board: &Board) -> usize;

    /// Return the chooser's display name.
    fn name(&self) -> &str;
}

/// Ask `chooser` for columns until it names one that can take a piece.
///
/// Returns `None` on a full board. A chooser that keeps naming full or
/// out-of-range columns is cut off after a bounded number of draws, and the
/// leftmost open column is used instead.
pub fn choose_open_column(chooser: &mut dyn ColumnChooser, board: &Board) -> Option<usize> {
    let open = board.open_columns();
    let fallback = *open.first()?;

    for _ in 0..REDRAWS_PER_COLUMN * board.width() {
        let col = chooser.choose_column(board);
        if open.contains(&col) {
            return Some(col);
        }
    }
    Some(fallback)
}
